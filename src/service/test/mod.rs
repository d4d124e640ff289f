use crate::{error::faq::FaqError, service::faq::FaqStore};
use test_utils::{builder::TestBuilder, fixture};
