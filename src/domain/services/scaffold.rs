#[cfg(test)]
#[path = "scaffold_test.rs"]
mod tests;

use crate::domain::models::FileMap;
use crate::domain::models::FileRecord;

/// Shown by consumers in place of an empty message list.
pub const NO_MESSAGES_PLACEHOLDER: &str = "No messages available.";

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Document</title>
    <script src="https://cdn.tailwindcss.com"></script>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/index.js"></script>
  </body>
</html>"#;

const INDEX_JS: &str = r#"import React from "react";
import ReactDOM from "react-dom/client";
import App from "./App";
import "./App.css";

const root = ReactDOM.createRoot(document.getElementById("root"));
root.render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);"#;

const APP_JS: &str = r#"import React from "react";

function App() {
  return (
    <div className="flex justify-center items-center h-screen">
      <h1 className="text-3xl font-bold">Hello, World!</h1>
    </div>
  );
}

export default App;"#;

const APP_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;"#;

const TAILWIND_CONFIG_JS: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    "./**/*.{js,jsx,ts,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}"#;

const POSTCSS_CONFIG_JS: &str = r#"/** @type {import('postcss-load-config').Config} */
const config = {
  plugins: {
    tailwindcss: {},
  },
};

export default config;"#;

/// The baseline file set every workspace starts from: an HTML entry, the JS
/// entry, a root component, a stylesheet, and two tooling configs.
pub fn default_project() -> FileMap {
    let mut files = FileMap::new();
    files.insert("/public/index.html".to_string(), FileRecord::new(INDEX_HTML));
    files.insert("/index.js".to_string(), FileRecord::new(INDEX_JS));
    files.insert("/App.js".to_string(), FileRecord::new(APP_JS));
    files.insert("/App.css".to_string(), FileRecord::new(APP_CSS));
    files.insert(
        "/tailwind.config.js".to_string(),
        FileRecord::new(TAILWIND_CONFIG_JS),
    );
    files.insert(
        "/postcss.config.js".to_string(),
        FileRecord::new(POSTCSS_CONFIG_JS),
    );

    return files;
}

/// Shallow override keyed by path: `overlay` wins on conflict, `base`-only
/// paths are retained, `overlay`-only paths are added. File contents are
/// never merged recursively.
pub fn merge_files(base: &FileMap, overlay: &FileMap) -> FileMap {
    let mut merged = base.clone();
    for (path, record) in overlay {
        merged.insert(path.to_string(), record.clone());
    }

    return merged;
}
