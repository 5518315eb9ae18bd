pub(crate) mod expr;
pub(crate) mod timezone;

pub(crate) use expr::{evaluate, format_number};
pub(crate) use timezone::Timezone;
