use anyhow::Result;

use crate::data::filter;
use crate::data::loader;
use crate::ui::{prompt, report};

// ---------------------------------------------------------------------------
// Interactive session loop
// ---------------------------------------------------------------------------

/// Run the explore loop until the user declines a restart.
///
/// Each round: prompt for city + filters, load, filter to a view, print the
/// four statistics blocks, page raw rows. A load failure is reported and the
/// round ends at the restart question; it is never retried automatically.
pub fn run() -> Result<()> {
    loop {
        let (city, spec) = prompt::get_filters()?;
        log::info!("exploring {} with {spec:?}", city.name);

        match loader::load_city(city) {
            Ok(dataset) => {
                if dataset.is_empty() {
                    log::warn!("source for {} has no trips", city.name);
                }
                let view = filter::filter(&dataset, &spec);
                log::info!("{} of {} trips pass the filter", view.len(), dataset.len());

                report::time_stats(&view);
                report::station_stats(&view);
                report::duration_stats(&view);
                report::user_stats(&view);
                report::page_raw_rows(&view)?;
            }
            Err(e) => {
                log::error!("failed to load data for {}: {e}", city.name);
                println!("\nCould not load data for {}: {e}", city.name);
                prompt::rule();
            }
        }

        if !prompt::confirm("\nWould you like to restart? Enter \"yes\" or \"no\":")? {
            break;
        }
    }

    Ok(())
}
