//! Mask alarms command implementation.
//!
//! The `swarmgate mask-alarms <DMA/ELEMENT>` command masks every active
//! critical alarm of one element in a single request.

use crate::alarms::{AlarmMasker, ElementId};
use crate::api::AlarmService;
use crate::cli::args::MaskAlarmsArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::with_spinner;

/// The mask-alarms command implementation.
pub struct MaskAlarmsCommand<'a> {
    service: &'a dyn AlarmService,
    args: MaskAlarmsArgs,
}

impl<'a> MaskAlarmsCommand<'a> {
    /// Create a new mask-alarms command.
    pub fn new(service: &'a dyn AlarmService, args: MaskAlarmsArgs) -> Self {
        Self { service, args }
    }
}

impl Command for MaskAlarmsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Parsed before any remote call.
        let element: ElementId = self.args.element_id.parse()?;
        let masker = AlarmMasker::new(self.service);

        let report = with_spinner(ui, &format!("Masking critical alarms on {}...", element), || {
            masker.mask_critical(element, self.args.dry_run)
        })?;

        for alarm in &report.masked {
            ui.show_hint(&format!("{}/{}", alarm.data_miner_id, alarm.alarm_id));
        }

        if report.masked.is_empty() {
            ui.message(&format!(
                "No critical alarms on {} ({} active).",
                report.element, report.inspected
            ));
        } else if self.args.dry_run {
            ui.message(&format!(
                "Would mask {} of {} active alarms on {}.",
                report.masked.len(),
                report.inspected,
                report.element
            ));
        } else {
            ui.success(&format!(
                "Masked {} critical alarms on {}.",
                report.masked.len(),
                report.element
            ));
        }

        Ok(CommandResult::success())
    }
}
