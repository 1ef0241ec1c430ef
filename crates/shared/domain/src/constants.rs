//! Configuration keys, as they appear in harness YAML documents.

pub const CLASS: &str = "class";
pub const EXECUTABLE: &str = "executable";
pub const ARGUMENTS: &str = "arguments";
pub const URL: &str = "url";

pub const FORMATS: &str = "formats";
pub const INPUT_FORMATS: &str = "input-formats";
pub const OUTPUT_FORMATS: &str = "output-formats";

pub const TEST_CASES: &str = "test-cases";
pub const COMPARATORS: &str = "comparators";
pub const SKIP_TESTS: &str = "skip-tests";

/// Prefix of test case directory names (`test-<id>`).
pub const TEST_CASE_PREFIX: &str = "test-";

/// Environment variable naming the harness configuration document.
pub const CONFIGURATION_FILE_ENV: &str = "PROV_HARNESS_CONFIGURATION_FILE";
/// Document used when neither an explicit path nor the environment variable is given.
pub const DEFAULT_CONFIGURATION_FILE: &str = "harness-configuration.yaml";
