/// Convenience helper for snapshotting parser output as pretty JSON.
pub fn snapshot_from_str(input: &str) -> String {
    serde_json::to_string_pretty(&crate::parse_motion_path(input))
        .unwrap_or_else(|err| format!("failed to render JSON: {err}"))
}
