use std::fmt::Display;

/// Log and drop the error side of a `Result` that has nobody to report to.
pub trait OrLog
{
    fn or_log(self, context: impl Display);
}

impl<E: Display> OrLog for Result<(), E>
{
    fn or_log(self, context: impl Display)
    {
        if let Err(e) = self
        {
            tracing::error!(%context, "{}", e);
        }
    }
}
