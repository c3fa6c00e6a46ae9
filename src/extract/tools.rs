//! External tool discovery.

use crate::config::Settings;

/// Check if a binary is available on PATH (or at an explicit path).
pub fn check_binary(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Report availability of the external tools the extractors depend on.
///
/// Returns (tool name, available) pairs for the poppler utilities and the
/// configured Tesseract command.
pub fn check_tools(settings: &Settings) -> Vec<(String, bool)> {
    let mut tools: Vec<(String, bool)> = ["pdftotext", "pdfinfo", "pdftoppm"]
        .iter()
        .map(|tool| (tool.to_string(), check_binary(tool)))
        .collect();
    tools.push((
        settings.tesseract_cmd.clone(),
        check_binary(&settings.tesseract_cmd),
    ));
    tools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_tools() {
        let tools = check_tools(&Settings::default());
        assert_eq!(tools.len(), 4);
        for (tool, available) in tools {
            println!("{}: {}", tool, if available { "found" } else { "missing" });
        }
    }

    #[test]
    fn test_check_binary_missing() {
        assert!(!check_binary("definitely-not-a-real-tool-xyz"));
    }
}
