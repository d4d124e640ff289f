pub mod devinfo;
pub mod faq;

pub use devinfo::DevInfoCommand;
pub use faq::FaqCommand;
