use crate::error::{HarnessError, HarnessErrorExt};
use interop_domain::constants::{
    CLASS, COMPARATORS, CONFIGURATION_FILE_ENV, DEFAULT_CONFIGURATION_FILE, SKIP_TESTS,
    TEST_CASE_PREFIX, TEST_CASES,
};
use interop_domain::{CanonicalFormat, Configuration};
use interop_kernel::config::{load_configuration, resolve_path};
use interop_kernel::validator::{self, scalar_text};
use interop_kernel::{
    Comparator, Component, ComponentFactory, ComponentRegistry, ConfigError, Converter,
};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The harness configuration: where the test cases live and which comparator
/// judges each format.
///
/// ```yaml
/// test-cases: /home/user/test-cases
/// comparators:
///   ProvPyComparator:
///     class: interop_provpy::ProvPyComparator
///     executable: prov-compare
///     arguments: -f FORMAT1 -F FORMAT2 FILE1 FILE2
///     formats: [provx, json]
/// ```
///
/// Reconfiguring means building a new `Harness`; nothing is updated in place.
#[derive(Debug)]
pub struct Harness {
    configuration: Configuration,
    test_cases_dir: PathBuf,
    comparators: ComponentRegistry<dyn Comparator>,
}

impl Harness {
    /// Builds a harness from a `test-cases` + `comparators` mapping.
    ///
    /// # Errors
    /// [`ConfigError`] when either key is missing or a comparator cannot be built.
    pub fn configure(
        factory: &ComponentFactory<dyn Comparator>,
        config: &Value,
    ) -> Result<Self, ConfigError> {
        let mapping = validator::as_mapping(config)?;
        validator::check_required_keys(mapping, &[TEST_CASES, COMPARATORS])?;

        let test_cases_dir = PathBuf::from(validator::string_value(mapping, TEST_CASES)?);
        let comparators = ComponentRegistry::register(factory, &mapping[COMPARATORS])?;

        Ok(Self { configuration: mapping.clone(), test_cases_dir, comparators })
    }

    /// Loads the harness document from `explicit`, else the file named by
    /// `PROV_HARNESS_CONFIGURATION_FILE`, else `harness-configuration.yaml`.
    ///
    /// # Errors
    /// [`HarnessError::Load`] when the document is absent or malformed,
    /// [`HarnessError::Config`] when it does not describe a usable harness.
    pub fn from_file(
        factory: &ComponentFactory<dyn Comparator>,
        explicit: Option<&Path>,
    ) -> Result<Self, HarnessError> {
        let default = Path::new(DEFAULT_CONFIGURATION_FILE);
        let path = resolve_path(explicit, CONFIGURATION_FILE_ENV, default);
        let configuration = load_configuration(&path)?;
        let harness = Self::configure(factory, &Value::Object(configuration))
            .context(path.display().to_string())?;

        info!(
            path = %path.display(),
            comparators = harness.comparators.len(),
            "Harness configured"
        );
        Ok(harness)
    }

    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub fn test_cases_dir(&self) -> &Path {
        &self.test_cases_dir
    }

    #[must_use]
    pub const fn comparators(&self) -> &ComponentRegistry<dyn Comparator> {
        &self.comparators
    }

    /// The comparator that judges documents of `format`.
    #[must_use]
    pub fn comparator_for(&self, format: CanonicalFormat) -> Option<&dyn Comparator> {
        self.comparators.for_format(format).map(AsRef::as_ref)
    }

    /// Enumerates test cases.
    ///
    /// Every sub-directory `test-<id>` of the test cases directory, in name order,
    /// contributes its files whose extension is a canonical format with a registered
    /// comparator. Each ordered pair of those files (a file paired with itself
    /// included) is one test case.
    ///
    /// # Errors
    /// [`HarnessError::Config`] if the test cases directory does not exist,
    /// [`HarnessError::Io`] if it cannot be read.
    pub fn test_cases(&self) -> Result<Vec<TestCase>, HarnessError> {
        let root = &self.test_cases_dir;
        if !root.is_dir() {
            return Err(ConfigError::invalid_value(
                TEST_CASES,
                format!("Directory not found: {}", root.display()),
            )
            .into());
        }

        let mut cases = Vec::new();
        let dirs = sorted_entries(root)?
            .into_iter()
            .filter_map(|path| test_case_dir(&path).map(|id| (id, path)));
        for (id, dir) in dirs {
            let files: Vec<(CanonicalFormat, PathBuf)> = sorted_entries(&dir)?
                .into_iter()
                .filter(|path| path.is_file())
                .filter_map(|path| CanonicalFormat::from_path(&path).map(|format| (format, path)))
                .filter(|(format, _)| self.comparators.for_format(*format).is_some())
                .collect();

            debug!(id = %id, files = files.len(), "Collected test case documents");
            for (format1, file1) in &files {
                for (format2, file2) in &files {
                    cases.push(TestCase {
                        id: id.clone(),
                        format1: *format1,
                        file1: file1.clone(),
                        format2: *format2,
                        file2: file2.clone(),
                    });
                }
            }
        }

        Ok(cases)
    }
}

/// One pairing of two documents of the same test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub id: String,
    pub format1: CanonicalFormat,
    pub file1: PathBuf,
    pub format2: CanonicalFormat,
    pub file2: PathBuf,
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test_case_{}_{}_{}", self.id, self.format1, self.format2)
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let mut paths = fs::read_dir(dir)
        .context(dir.display().to_string())?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()
        .context(dir.display().to_string())?;
    paths.sort();
    Ok(paths)
}

/// The id of a `test-<id>` directory, where `<id>` is letters, digits, `_` or `-`.
fn test_case_dir(path: &Path) -> Option<String> {
    if !path.is_dir() {
        return None;
    }
    let id = path.file_name()?.to_str()?.strip_prefix(TEST_CASE_PREFIX)?;
    let valid = !id.is_empty() && id.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    valid.then(|| id.to_owned())
}

/// Loads a converter from its own document. The document names the adapter in
/// `class`, like a registry entry does.
///
/// The path is `explicit`, else the file named by `env_var`, else `default`.
///
/// # Errors
/// [`HarnessError::Load`] when the document is absent or malformed,
/// [`HarnessError::Config`] when `class` is missing or unknown or configuration fails.
pub fn load_converter(
    factory: &ComponentFactory<dyn Converter>,
    env_var: &str,
    default: &Path,
    explicit: Option<&Path>,
) -> Result<Box<dyn Converter>, HarnessError> {
    let path = resolve_path(explicit, env_var, default);
    let configuration = load_configuration(&path)?;
    let context = || format!("Configuring converter from {}", path.display());

    let class = validator::string_value(&configuration, CLASS).context(context())?;
    let mut converter = factory.get_instance(class).context(context())?;
    converter.configure(&Value::Object(configuration.clone())).context(context())?;

    info!(path = %path.display(), class, "Converter configured");
    Ok(converter)
}

/// Test case ids listed under `skip-tests`, rendered as strings. Empty when the key
/// is absent.
///
/// # Errors
/// [`ConfigError::InvalidValue`] when `skip-tests` is not a list of scalars.
pub fn skip_tests(component: &(impl Component + ?Sized)) -> Result<Vec<String>, ConfigError> {
    let Some(value) = component.configuration().get(SKIP_TESTS) else {
        return Ok(Vec::new());
    };

    value
        .as_array()
        .and_then(|items| {
            items
                .iter()
                .map(|item| match item {
                    Value::String(_) | Value::Number(_) => Some(scalar_text(item)),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
        })
        .ok_or_else(|| ConfigError::invalid_value(SKIP_TESTS, "expected a list of test case ids"))
}
