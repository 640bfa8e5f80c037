use crate::cli::WindowArgs;
use crate::output::output_success;
use schooldesk_core::{page_window, PageToken};
use serde::Serialize;

#[derive(Serialize)]
struct WindowOutput {
    tokens: Vec<PageToken>,
    keys: Vec<String>,
}

pub fn handle(args: WindowArgs) -> anyhow::Result<()> {
    let current = usize::try_from(args.current)?;
    let tokens = page_window(current, args.total);
    let keys = tokens
        .iter()
        .enumerate()
        .map(|(position, token)| token.key(position))
        .collect();
    output_success(WindowOutput { tokens, keys })
}
