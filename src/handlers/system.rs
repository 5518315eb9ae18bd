use regex::Captures;

use super::Context;
use crate::consts::SYSTEM_INFO_FAILED;
use crate::core::Reply;
use crate::error::ServiceError;
use crate::platform::SystemMetrics;

fn read_usage(metrics: &mut dyn SystemMetrics) -> Result<(f32, f32, f32), ServiceError> {
    Ok((
        metrics.cpu_percent()?,
        metrics.memory_percent()?,
        metrics.disk_percent()?,
    ))
}

pub(crate) fn system_info(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    match read_usage(ctx.platform.metrics.as_mut()) {
        Ok((cpu, memory, disk)) => Reply::text(format!(
            "System Status: CPU usage: {cpu:.1}%, Memory usage: {memory:.1}%, Disk usage: {disk:.1}%"
        )),
        Err(e) => {
            log::debug!("System info error: {e}");
            Reply::text(SYSTEM_INFO_FAILED)
        }
    }
}
