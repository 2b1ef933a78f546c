#[cfg(test)]
#[path = "tokens_test.rs"]
mod tests;

/// Estimates the token usage of a serialized generation result by counting
/// whitespace-separated words after trimming.
///
/// Empty and all-whitespace inputs deliberately count as 1, not 0. Billing
/// history was produced with that floor, so it must be preserved bit-for-bit.
pub fn estimated_cost(text: &str) -> i64 {
    let count = text.trim().split_whitespace().count() as i64;
    if count == 0 {
        return 1;
    }

    return count;
}
