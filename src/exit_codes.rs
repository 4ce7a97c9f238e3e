//! Exit code constants for the difflog CLI.
//!
//! - 0: Success (including an empty diff)
//! - 1: User error (bad args, unreadable or undecodable input, bad config)
//! - 3: Diff source failure (git could not produce a diff)
//! - 4: Embedding service failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Diff source failure: `git diff` could not be run or exited non-zero.
pub const SOURCE_FAILURE: i32 = 3;

/// Embedding service failure: the call failed or timed out.
pub const EMBEDDING_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, SOURCE_FAILURE, EMBEDDING_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
