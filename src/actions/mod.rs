pub mod generate;
pub mod interactive;
pub mod strength;

use anyhow::anyhow;
use clipboard::ClipboardContext;
use clipboard::ClipboardProvider;

pub trait Action {
    fn run(&self) -> anyhow::Result<()>;
}

pub fn copy_to_clipboard(value: &str) -> anyhow::Result<()> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| anyhow!("failed to open clipboard: {}", e))?;
    ctx.set_contents(String::from(value))
        .map_err(|e| anyhow!("failed to write to clipboard: {}", e))?;
    Ok(())
}
