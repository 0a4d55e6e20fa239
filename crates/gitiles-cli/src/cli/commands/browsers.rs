//! `gitiles browsers` – list registered strategies.

use gitiles_core::browser::BrowserRegistry;

pub fn run_browsers(registry: &BrowserRegistry) {
    for d in registry.descriptors() {
        println!("{:<12}  {}", d.symbol, d.display_name);
    }
}
