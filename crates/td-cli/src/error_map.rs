use std::fmt::Display;
use std::io::Write;

use td_core::TermDrillError;

fn map_error(code: &'static str, error: impl Display) -> TermDrillError {
    TermDrillError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: TermDrillError) -> i32 {
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    emit_error_to(&mut writer, &error)
}

pub(crate) fn emit_error_to(writer: &mut dyn Write, error: &TermDrillError) -> i32 {
    tracing::debug!(code = %error.code, "command failed");
    let message_json =
        serde_json::to_string(&error.message).unwrap_or_else(|_| "\"\"".to_string());
    let _ = writeln!(writer, "RESULT:ERROR");
    let _ = writeln!(writer, "ERROR_CODE:{}", error.code);
    let _ = writeln!(writer, "ERROR_MSG_JSON:{}", message_json);
    1
}

pub(crate) fn map_tui_io(error: std::io::Error) -> TermDrillError {
    map_error("TUI_IO", error)
}

pub(crate) fn map_cli_io(error: std::io::Error) -> TermDrillError {
    map_error("CLI_IO", error)
}

pub(crate) fn map_cli_output_encode(error: serde_json::Error) -> TermDrillError {
    map_error("CLI_OUTPUT_ENCODE", error)
}

pub(crate) fn map_cli_catalog_path(error: std::io::Error) -> TermDrillError {
    map_error("CLI_CATALOG_PATH", error)
}

pub(crate) fn map_cli_catalog_scan(error: std::path::StripPrefixError) -> TermDrillError {
    map_error("CLI_CATALOG_SCAN", error)
}

pub(crate) fn map_cli_catalog_read(error: std::io::Error) -> TermDrillError {
    map_error("CLI_CATALOG_READ", error)
}

#[cfg(test)]
mod error_map_tests {
    use super::*;

    #[test]
    fn emit_error_writes_envelope_and_returns_non_zero() {
        let mut out = Vec::new();
        let code = emit_error_to(
            &mut out,
            &TermDrillError::new("CATALOG_EMPTY", "no \"scenarios\""),
        );
        assert_eq!(code, 1);
        let text = String::from_utf8(out).expect("utf-8");
        assert_eq!(
            text,
            "RESULT:ERROR\nERROR_CODE:CATALOG_EMPTY\nERROR_MSG_JSON:\"no \\\"scenarios\\\"\"\n"
        );
    }

    #[test]
    fn mapping_helpers_keep_error_codes() {
        assert_eq!(map_tui_io(std::io::Error::other("io")).code, "TUI_IO");
        assert_eq!(map_cli_io(std::io::Error::other("io")).code, "CLI_IO");
        let encode_error =
            serde_json::from_str::<String>("{").expect_err("invalid json should fail");
        assert_eq!(map_cli_output_encode(encode_error).code, "CLI_OUTPUT_ENCODE");
        assert_eq!(
            map_cli_catalog_path(std::io::Error::other("path")).code,
            "CLI_CATALOG_PATH"
        );

        let strip_error = std::path::Path::new("/a")
            .strip_prefix("/b")
            .expect_err("strip prefix");
        assert_eq!(map_cli_catalog_scan(strip_error).code, "CLI_CATALOG_SCAN");

        assert_eq!(
            map_cli_catalog_read(std::io::Error::other("read")).code,
            "CLI_CATALOG_READ"
        );
    }
}
