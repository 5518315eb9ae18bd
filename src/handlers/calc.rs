use regex::Captures;

use super::Context;
use crate::core::Reply;
use crate::error::CommandError;
use crate::utils::{evaluate, format_number};

/// "calculate <expr>"; a spoken "x" means multiplication
pub(crate) fn calculate(_ctx: &mut Context<'_>, caps: &Captures<'_>) -> Reply {
    let expression = caps[1].replace('x', "*");
    match evaluate(&expression) {
        Ok(value) => Reply::text(format!("The result is {}", format_number(value))),
        Err(e) => {
            log::debug!("Calculation of {expression:?} failed: {e}");
            Reply::text(CommandError::from(e).to_string())
        }
    }
}
