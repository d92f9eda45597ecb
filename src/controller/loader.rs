//! Dashboard loading. Each loader swallows its own failure and keeps
//! whatever was loaded before.

use super::DashboardController;
use crate::api::error::ApiError;

impl DashboardController {
    /// Loads the dashboard matching the current user's role.
    pub async fn load_dashboard(&mut self) {
        if !self.state.is_logged_in() {
            log::debug!("Dashboard load skipped: not logged in");
            return;
        }
        if self.state.is_admin() {
            self.load_admin_dashboard().await;
        } else {
            self.load_user_dashboard().await;
        }
    }

    /// Lots and stats in parallel, then users and reservations one after the other.
    pub async fn load_admin_dashboard(&mut self) {
        let result = futures::try_join!(self.api.get_parking_lots(), self.api.get_admin_stats());
        if let Ok((lots, stats)) = self.surface("Loading admin dashboard", result) {
            log::debug!("Loaded {} parking lots", lots.len());
            self.state.parking_lots = lots;
            self.state.admin_stats = Some(stats);
        }
        self.load_users().await;
        self.load_reservations().await;
    }

    pub async fn load_users(&mut self) {
        let result = self.api.get_users().await;
        if let Ok(users) = self.surface("Loading users", result) {
            self.state.users = users;
        }
    }

    pub async fn load_reservations(&mut self) {
        let result = self.api.get_reservations().await;
        if let Ok(reservations) = self.surface("Loading reservations", result) {
            self.state.reservations = reservations;
        }
    }

    /// Personal stats, own reservations and bookable lots, fetched together.
    pub async fn load_user_dashboard(&mut self) {
        let result = futures::try_join!(
            self.api.get_user_stats(),
            self.api.get_my_reservations(),
            self.api.get_available_lots()
        );
        if let Ok((stats, reservations, lots)) = self.surface("Loading user dashboard", result) {
            self.state.user_stats = Some(stats);
            self.state.my_reservations = reservations;
            self.state.available_lots = lots;
        }
    }

    pub async fn load_admin_charts(&mut self) -> Result<(), ApiError> {
        let result = self.api.get_admin_charts().await;
        let charts = self.surface("Loading charts", result)?;
        self.state.admin_charts = Some(charts);
        Ok(())
    }

    pub async fn load_active_reservation(&mut self) -> Result<(), ApiError> {
        let result = self.api.get_active_reservation().await;
        let active = self.surface("Loading active reservation", result)?;
        self.state.active_reservation = active.into_option();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::api::MockParkingApi;
    use crate::models::{
        ActiveReservation, AdminCharts, DailyBookings, LotOccupancy, Role, UserStats,
    };
    use crate::presenter::MockPresenter;
    use mockall::predicate::eq;
    use std::time::Duration;
    use tempfile::tempdir;
    use tokio::time::timeout;

    fn gated_controller(api: GatedApi, dir: &std::path::Path) -> super::DashboardController {
        super::DashboardController::new(
            Box::new(api),
            Box::new(MockPresenter::new()),
            Box::new(store(dir)),
        )
    }

    #[tokio::test]
    /// The three user reads only finish if all of them are in flight at once.
    async fn test_user_dashboard_reads_run_in_parallel() {
        let dir = tempdir().unwrap();
        persist_session(dir.path(), "T", &user(1, Role::User));
        let api = GatedApi::all_at_once(&[
            "get_user_stats",
            "get_my_reservations",
            "get_available_lots",
        ]);
        let mut controller = gated_controller(api, dir.path());
        assert!(controller.restore_session());

        timeout(Duration::from_secs(2), controller.load_user_dashboard())
            .await
            .expect("user dashboard reads were not issued together");

        assert_eq!(controller.state().available_lots.len(), 2);
        assert_eq!(controller.state().my_reservations.len(), 1);
    }

    #[tokio::test]
    /// Lots and stats are requested together; users and reservations follow.
    async fn test_admin_lots_and_stats_run_in_parallel() {
        let dir = tempdir().unwrap();
        persist_session(dir.path(), "A", &user(7, Role::Admin));
        let api = GatedApi::all_at_once(&["get_parking_lots", "get_admin_stats"]);
        let mut controller = gated_controller(api, dir.path());
        assert!(controller.restore_session());

        timeout(Duration::from_secs(2), controller.load_admin_dashboard())
            .await
            .expect("lots and stats were not issued together");

        assert_eq!(controller.state().parking_lots, vec![lot(1)]);
        assert!(controller.state().admin_stats.is_some());
        assert_eq!(controller.state().users.len(), 1);
        assert_eq!(controller.state().reservations.len(), 1);
    }

    #[tokio::test]
    /// Logged out: no request at all.
    async fn test_load_dashboard_without_session_is_noop() {
        let dir = tempdir().unwrap();
        let mut controller = controller(MockParkingApi::new(), MockPresenter::new(), dir.path());
        controller.load_dashboard().await;
        assert!(controller.state().parking_lots.is_empty());
    }

    #[tokio::test]
    /// A failed lots/stats pair keeps the old lots and still loads users and reservations.
    async fn test_admin_pair_failure_keeps_previous_lots() {
        let dir = tempdir().unwrap();
        persist_session(dir.path(), "A", &user(7, Role::Admin));

        let mut api = api();
        api.expect_get_parking_lots()
            .times(1)
            .returning(|| Err(http_error(500, "Internal server error")));
        api.expect_get_admin_stats()
            .returning(|| Ok(Default::default()));
        api.expect_get_users().times(1).returning(|| Ok(vec![]));
        api.expect_get_reservations()
            .times(1)
            .returning(|| Ok(vec![]));
        let mut presenter = MockPresenter::new();
        presenter
            .expect_alert()
            .with(eq("Internal server error"))
            .times(1)
            .returning(|_| ());
        let mut controller = controller(api, presenter, dir.path());
        assert!(controller.restore_session());
        controller.state.parking_lots = vec![lot(1), lot(2)];

        controller.load_admin_dashboard().await;

        assert_eq!(controller.state().parking_lots.len(), 2);
        assert!(controller.state().users.is_empty());
    }

    #[tokio::test]
    /// Failures without a server message are logged but never alerted.
    async fn test_user_dashboard_failure_is_silent_and_preserves_state() {
        let dir = tempdir().unwrap();
        persist_session(dir.path(), "T", &user(1, Role::User));

        let mut api = api();
        api.expect_get_user_stats()
            .returning(|| Err(silent_error()));
        api.expect_get_my_reservations().returning(|| Ok(vec![]));
        api.expect_get_available_lots().returning(|| Ok(vec![]));

        // No alert expectation: an alert would panic the mock.
        let mut controller = controller(api, MockPresenter::new(), dir.path());
        assert!(controller.restore_session());
        controller.state.available_lots = vec![lot(3)];
        controller.state.user_stats = Some(UserStats {
            total_bookings: 4,
            ..UserStats::default()
        });

        controller.load_user_dashboard().await;

        assert_eq!(controller.state().available_lots, vec![lot(3)]);
        assert_eq!(controller.state().user_stats.as_ref().unwrap().total_bookings, 4);
    }

    #[tokio::test]
    async fn test_load_admin_charts() {
        let dir = tempdir().unwrap();
        let mut api = MockParkingApi::new();
        api.expect_get_admin_charts().times(1).returning(|| {
            Ok(AdminCharts {
                lot_occupancy: vec![LotOccupancy {
                    name: "Lot 1".to_string(),
                    total: 10,
                    occupied: 4,
                    available: 6,
                    occupancy_rate: 40.0,
                }],
                daily_bookings: vec![DailyBookings {
                    date: "2024-05-01".to_string(),
                    bookings: 3,
                }],
                revenue_by_lot: vec![],
            })
        });
        let mut controller = controller(api, MockPresenter::new(), dir.path());

        controller.load_admin_charts().await.unwrap();

        let charts = controller.state().admin_charts.as_ref().unwrap();
        assert_eq!(charts.lot_occupancy[0].occupied, 4);
        assert_eq!(charts.daily_bookings[0].bookings, 3);
    }

    #[tokio::test]
    async fn test_load_active_reservation_handles_none() {
        let dir = tempdir().unwrap();
        let mut api = MockParkingApi::new();
        api.expect_get_active_reservation()
            .times(1)
            .returning(|| {
                Ok(ActiveReservation::None {
                    message: "No active reservation".to_string(),
                })
            });
        let mut controller = controller(api, MockPresenter::new(), dir.path());
        controller.state.active_reservation = Some(reservation(3, 1));

        controller.load_active_reservation().await.unwrap();

        assert_eq!(controller.state().active_reservation, None);
    }
}
