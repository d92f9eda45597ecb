//! Admin lot management commands.

use super::require_admin;
use crate::controller::{ActionOutcome, DashboardController};
use crate::models::{LotForm, ParkingLot};
use crate::pretty::{print_cmd_info, print_cmd_section};
use crate::report;
use crate::session::console_controller;
use std::error::Error;

/// Lot fields given on the command line. Unset fields keep their current value on update.
#[derive(Debug, Clone, Default)]
pub struct LotFields {
    pub name: Option<String>,
    pub price_per_hour: Option<f64>,
    pub address: Option<String>,
    pub pin_code: Option<String>,
    pub number_of_spots: Option<u32>,
}

impl LotFields {
    fn apply_to(self, form: &mut LotForm) {
        if let Some(name) = self.name {
            form.prime_location_name = name;
        }
        if let Some(price) = self.price_per_hour {
            form.price_per_hour = price;
        }
        if let Some(address) = self.address {
            form.address = address;
        }
        if let Some(pin_code) = self.pin_code {
            form.pin_code = pin_code;
        }
        if let Some(spots) = self.number_of_spots {
            form.number_of_spots = spots;
        }
    }
}

fn admin_controller(assume_yes: bool) -> Result<DashboardController, Box<dyn Error>> {
    let controller = console_controller(assume_yes)?;
    require_admin(&controller)?;
    Ok(controller)
}

/// Loads the lot list and picks `lot_id` out of it.
async fn find_lot(
    controller: &mut DashboardController,
    lot_id: u64,
) -> Result<ParkingLot, Box<dyn Error>> {
    controller.load_admin_dashboard().await;
    controller
        .state()
        .parking_lots
        .iter()
        .find(|lot| lot.id == lot_id)
        .cloned()
        .ok_or_else(|| format!("Parking lot #{} not found", lot_id).into())
}

pub async fn list() -> Result<(), Box<dyn Error>> {
    let mut controller = admin_controller(false)?;
    controller.load_admin_dashboard().await;

    let state = controller.state();
    if let Some(stats) = &state.admin_stats {
        print_cmd_section!("Overview");
        for line in report::admin_stats_lines(stats) {
            println!("{}", line);
        }
    }
    print_cmd_section!("Parking lots");
    if state.parking_lots.is_empty() {
        println!("No parking lots yet. Create one with `parkctl lots create`.");
    }
    for lot in &state.parking_lots {
        println!("{}", report::format_lot(lot));
    }
    Ok(())
}

pub async fn create(fields: LotFields) -> Result<(), Box<dyn Error>> {
    let mut controller = admin_controller(false)?;
    controller.open_create_lot();
    fields.apply_to(controller.lot_form_mut());
    controller.submit_lot().await?;
    Ok(())
}

pub async fn update(lot_id: u64, fields: LotFields) -> Result<(), Box<dyn Error>> {
    let mut controller = admin_controller(false)?;
    let lot = find_lot(&mut controller, lot_id).await?;
    controller.edit_lot(&lot);
    fields.apply_to(controller.lot_form_mut());
    controller.submit_lot().await?;
    Ok(())
}

pub async fn delete(lot_id: u64, assume_yes: bool) -> Result<(), Box<dyn Error>> {
    let mut controller = admin_controller(assume_yes)?;
    if controller.delete_lot(lot_id).await? == ActionOutcome::Cancelled {
        println!("Cancelled. Parking lot #{} was not deleted.", lot_id);
    }
    Ok(())
}

pub async fn spots(lot_id: u64) -> Result<(), Box<dyn Error>> {
    let mut controller = admin_controller(false)?;
    let lot = find_lot(&mut controller, lot_id).await?;
    controller.view_spots(&lot).await?;

    let title = lot.prime_location_name;
    print_cmd_section!(title);
    for spot in &controller.state().spots {
        println!("{}", report::format_spot(spot));
    }
    controller.close_modal();
    Ok(())
}

pub async fn charts() -> Result<(), Box<dyn Error>> {
    let mut controller = admin_controller(false)?;
    controller.load_admin_charts().await?;
    if let Some(charts) = &controller.state().admin_charts {
        print_cmd_info!("Charts", "{}", report::chart_lines(charts).join("\n"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_keep_the_form_values() {
        let mut form = LotForm {
            prime_location_name: "Central".to_string(),
            price_per_hour: 20.0,
            address: "1 Main St".to_string(),
            pin_code: "560001".to_string(),
            number_of_spots: 10,
        };
        LotFields {
            price_per_hour: Some(25.0),
            number_of_spots: Some(12),
            ..LotFields::default()
        }
        .apply_to(&mut form);

        assert_eq!(form.prime_location_name, "Central");
        assert_eq!(form.price_per_hour, 25.0);
        assert_eq!(form.number_of_spots, 12);
        assert_eq!(form.pin_code, "560001");
    }
}
