use crate::error::Result;

/// Interactive chooser over a list of lines. `Ok(None)` means the user
/// cancelled or nothing matched.
#[allow(async_fn_in_trait)]
pub trait Picker {
    async fn choose(&self, items: &[String], header: &str) -> Result<Option<String>>;
}
