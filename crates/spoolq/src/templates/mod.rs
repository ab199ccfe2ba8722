pub mod registry;

pub use registry::{PageLayout, TemplateDescriptor, TemplateRegistry, DEFAULT_TEMPLATE};
