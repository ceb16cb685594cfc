//! Functions that emit data for the wrapping shell function.

use crate::core::item::Item;

const OPEN_PREFIX: &str = "__KATALO_OPEN__=";

/// Emit the machine-readable exit payload for shell wrappers.
///
/// Only the URL itself is handed over; nothing about the session travels
/// with it.
pub fn print_exit_payload(link: Option<&str>) {
    if let Some(url) = link {
        println!("{}", exit_payload(url));
    }
}

fn exit_payload(url: &str) -> String {
    // A payload line must stay a single line.
    let clean: String = url.chars().filter(|c| !c.is_control()).collect();
    format!("{OPEN_PREFIX}{clean}")
}

/// Plain-text rendering of the strip for screen readers and pipes: the
/// first copy only, one item per line.
pub fn accessible_listing<'a>(items: impl Iterator<Item = &'a Item>) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(item.accessible_name());
        if let Some(href) = &item.href {
            out.push('\t');
            out.push_str(href);
        }
        out.push('\n');
    }
    out
}

/// Returns the bash function that users should add to their `.bashrc`.
///
/// The function is named after the binary (read from `Cargo.toml` at
/// compile time) and opens the chosen link with the platform opener.
pub fn bash_function() -> String {
    let bin = env!("CARGO_PKG_NAME");
    format!(
        r#"
# ── {bin}: campus landing screen ───────────────────────────
# Click a logo to open its link in your browser after the TUI exits.
{bin}() {{
    local output
    output="$(command {bin} "$@")"
    local exit_code=$?
    local url=""
    while IFS= read -r line; do
        case "$line" in
            {OPEN_PREFIX}*) url="${{line#{OPEN_PREFIX}}}" ;;
        esac
    done <<< "$output"
    if [ $exit_code -eq 0 ] && [ -n "$url" ]; then
        if command -v xdg-open >/dev/null 2>&1; then
            xdg-open "$url" >/dev/null 2>&1 &
        elif command -v open >/dev/null 2>&1; then
            open "$url"
        else
            printf 'Open: %s\n' "$url"
        fi
    fi
}}
"#
    )
}

/// Returns the zsh function that users should add to their `.zshrc`.
pub fn zsh_function() -> String {
    let bin = env!("CARGO_PKG_NAME");
    format!(
        r#"
# ── {bin}: campus landing screen ───────────────────────────
# Click a logo to open its link in your browser after the TUI exits.
{bin}() {{
    local output
    output="$(command {bin} "$@")"
    local exit_code=$?
    local url=""
    while IFS= read -r line; do
        case "$line" in
            {OPEN_PREFIX}*) url="${{line#{OPEN_PREFIX}}}" ;;
        esac
    done <<< "$output"
    if [[ $exit_code -eq 0 ]] && [[ -n "$url" ]]; then
        if (( $+commands[xdg-open] )); then
            xdg-open "$url" >/dev/null 2>&1 &!
        elif (( $+commands[open] )); then
            open "$url"
        else
            printf 'Open: %s\n' "$url"
        fi
    fi
}}
"#
    )
}
