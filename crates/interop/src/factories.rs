//! The built-in adapter tables.

use interop_kernel::{Comparator, ComponentFactory, Converter};
use interop_provpy::{ProvPyComparator, ProvPyConverter};
use interop_provtoolbox::{ProvToolboxComparator, ProvToolboxConverter};

/// Qualified class names accepted in `class` entries.
pub mod adapters {
    pub const PROVPY_CONVERTER: &str = "interop_provpy::ProvPyConverter";
    pub const PROVPY_COMPARATOR: &str = "interop_provpy::ProvPyComparator";
    pub const PROVTOOLBOX_CONVERTER: &str = "interop_provtoolbox::ProvToolboxConverter";
    pub const PROVTOOLBOX_COMPARATOR: &str = "interop_provtoolbox::ProvToolboxComparator";
}

fn provpy_converter() -> Box<dyn Converter> {
    Box::new(ProvPyConverter::default())
}

fn provtoolbox_converter() -> Box<dyn Converter> {
    Box::new(ProvToolboxConverter::default())
}

fn provpy_comparator() -> Box<dyn Comparator> {
    Box::new(ProvPyComparator::default())
}

fn provtoolbox_comparator() -> Box<dyn Comparator> {
    Box::new(ProvToolboxComparator::default())
}

/// Every built-in converter.
#[must_use]
pub fn converter_factory() -> ComponentFactory<dyn Converter> {
    ComponentFactory::new()
        .register(adapters::PROVPY_CONVERTER, provpy_converter)
        .register(adapters::PROVTOOLBOX_CONVERTER, provtoolbox_converter)
}

/// Every built-in comparator.
#[must_use]
pub fn comparator_factory() -> ComponentFactory<dyn Comparator> {
    ComponentFactory::new()
        .register(adapters::PROVPY_COMPARATOR, provpy_comparator)
        .register(adapters::PROVTOOLBOX_COMPARATOR, provtoolbox_comparator)
}
