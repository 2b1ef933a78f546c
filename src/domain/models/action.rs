/// Inputs accepted by the generation service loop.
pub enum Action {
    SubmitPrompt(String),
}
