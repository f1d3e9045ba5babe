//! Assertion macros with descriptive failure messages.

/// Assert that a run succeeded, printing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {{
        let result = &$result;
        assert!(
            result.success,
            "Expected success, got exit code {}\nstdout:\n{}\nstderr:\n{}",
            result.exit_code,
            result.stdout,
            result.stderr
        );
    }};
}

/// Assert that a run failed with exit code 1.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {{
        let result = &$result;
        assert_eq!(
            result.exit_code, 1,
            "Expected exit code 1\nstdout:\n{}\nstderr:\n{}",
            result.stdout, result.stderr
        );
    }};
}

/// Assert that stdout or stderr contains the expected text.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a generated file exists under the environment root.
#[macro_export]
macro_rules! assert_generated {
    ($env:expr, $path:expr) => {
        assert!(
            $env.path($path).is_file(),
            "Expected generated file '{}'\nFiles in root: {:?}",
            $path,
            $env.list("")
        );
    };
}
