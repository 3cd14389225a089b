use calc::Session;

/// Helper function to run a session over the given lines, returning the
/// finished session and everything written to the sink
pub fn run_lines(lines: &[&str]) -> (Session, Vec<String>) {
    let mut out = Vec::new();
    let session = calc::run(lines.iter().copied(), |msg| out.push(msg.to_string()));
    (session, out)
}

#[allow(dead_code)]
/// Helper function to run a session over the given lines, returning the
/// output joined into a single string
pub fn run_output(lines: &[&str]) -> String {
    run_lines(lines).1.join("\n")
}

#[allow(dead_code)]
/// Helper function to get an valid path to a test file in the testdata directory
pub fn test_file_path(filename: &str) -> String {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push(format!("tests/testdata/{}", filename));

    p.into_os_string()
        .into_string()
        .expect("failed to build filename")
}
