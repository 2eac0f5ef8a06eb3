//! Dashboard composition root
//!
//! [`Dashboard`] owns every piece of mutable state on the page (search term,
//! both dropdown toggles, the notification sequence) and the static content
//! it was mounted with. Renderers read a [`DashboardSnapshot`] and report
//! clicks back as [`DashboardEvent`]s; [`Dashboard::dispatch`] applies them
//! one at a time, in delivery order.
//!
//! The two dropdowns are independent: opening one never closes the other.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartSpec, SeriesProvider};
use crate::config::{Config, FooterConfig, HeaderButton};
use crate::model::UserProfile;
use crate::widgets::{Icon, MetricRow, NotificationCenter, ProfileAction, ProfileMenu, Toggle};

/// Interaction reported by a child component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Bell clicked
    ToggleNotifications,
    /// Header avatar clicked
    ToggleProfileMenu,
    /// Search input changed
    Search(String),
    /// Search button clicked
    SearchSubmit,
    /// Sidebar link clicked
    Nav(String),
    /// Header button clicked
    HeaderButton(String),
    /// Profile menu entry clicked
    ProfileAction(ProfileAction),
    /// Footer call-to-action clicked
    FooterCta,
}

/// All mutable state of the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardState {
    search: String,
    notifications: NotificationCenter,
    profile_menu: ProfileMenu,
}

impl DashboardState {
    /// Fresh state: empty search, both dropdowns closed
    pub fn new(notifications: Vec<String>) -> Self {
        Self {
            search: String::new(),
            notifications: NotificationCenter::new(notifications),
            profile_menu: ProfileMenu::default(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn profile_menu(&self) -> &ProfileMenu {
        &self.profile_menu
    }

    /// Apply one event; returns whether anything changed
    ///
    /// Navigation, header buttons, profile actions, search submission and the
    /// footer button are hooks for an embedding router and change nothing.
    pub fn apply(&mut self, event: &DashboardEvent) -> bool {
        match event {
            DashboardEvent::ToggleNotifications => {
                let now = self.notifications.toggle();
                tracing::debug!(state = %now, "notifications toggled");
                true
            }
            DashboardEvent::ToggleProfileMenu => {
                let now = self.profile_menu.toggle();
                tracing::debug!(state = %now, "profile menu toggled");
                true
            }
            DashboardEvent::Search(term) => {
                if self.search == *term {
                    return false;
                }
                self.search.clone_from(term);
                tracing::debug!(term = %self.search, "search term updated");
                true
            }
            inert => {
                tracing::debug!(event = ?inert, "no handler attached");
                false
            }
        }
    }
}

/// Sidebar link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarSnapshot {
    pub profile: UserProfile,
    pub nav: Vec<NavEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsSnapshot {
    pub icon: Icon,
    pub open: bool,
    /// Message count, absent when there are none
    pub badge: Option<usize>,
    /// Panel rows; empty while closed
    pub rows: Vec<String>,
    /// `rows` holds only the empty-state placeholder
    pub placeholder: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileMenuSnapshot {
    pub avatar_url: String,
    pub open: bool,
    /// Menu entries; empty while closed
    pub actions: Vec<ProfileAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderSnapshot {
    pub search_term: String,
    pub search_placeholder: String,
    pub buttons: Vec<HeaderButton>,
    pub notifications: NotificationsSnapshot,
    pub profile_menu: ProfileMenuSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSnapshot {
    pub title: String,
    pub period: String,
    pub team_avatars: Vec<String>,
}

/// Immutable view of the whole page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    pub sidebar: SidebarSnapshot,
    pub header: HeaderSnapshot,
    pub report: ReportSnapshot,
    pub metrics: Vec<MetricRow>,
    pub chart: ChartSpec,
    pub footer: FooterConfig,
}

/// Composition root: static content plus [`DashboardState`]
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: Config,
    chart: ChartSpec,
    state: DashboardState,
}

impl Dashboard {
    /// Mount with chart data from `provider`
    pub fn mount<P>(config: Config, provider: &P) -> Self
    where
        P: SeriesProvider + ?Sized,
    {
        let chart = ChartSpec {
            title: config.chart.title.clone(),
            stroke: config.chart.stroke.clone(),
            height: config.chart.height,
            points: provider.points(),
        };
        let state = DashboardState::new(config.notifications.clone());

        tracing::info!(
            metrics = config.metrics.len(),
            notifications = state.notifications().len(),
            chart_points = chart.points.len(),
            "dashboard mounted"
        );

        Self {
            config,
            chart,
            state,
        }
    }

    /// Mount with the sample series described by `config.chart`
    pub fn from_config(config: Config) -> Self {
        let series = config.chart.series();
        Self::mount(config, &series)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn chart(&self) -> &ChartSpec {
        &self.chart
    }

    pub fn notifications_open(&self) -> Toggle {
        self.state.notifications().state()
    }

    pub fn profile_menu_open(&self) -> Toggle {
        self.state.profile_menu().state()
    }

    /// Apply one event; returns whether state changed
    pub fn dispatch(&mut self, event: DashboardEvent) -> bool {
        self.state.apply(&event)
    }

    pub fn metric_rows(&self) -> Vec<MetricRow> {
        self.config.metrics.iter().map(MetricRow::from).collect()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let layout = &self.config.layout;
        let notifications = self.state.notifications();
        let panel = notifications.panel();
        let profile_menu = self.state.profile_menu();

        let nav = layout
            .nav_items
            .iter()
            .enumerate()
            .map(|(i, label)| NavEntry {
                label: label.clone(),
                active: i == layout.active_nav,
            })
            .collect();

        DashboardSnapshot {
            sidebar: SidebarSnapshot {
                profile: self.config.profile.clone(),
                nav,
            },
            header: HeaderSnapshot {
                search_term: self.state.search().to_string(),
                search_placeholder: layout.search_placeholder.clone(),
                buttons: layout.header_buttons.clone(),
                notifications: NotificationsSnapshot {
                    icon: Icon::Bell,
                    open: panel.is_visible(),
                    badge: notifications.badge(),
                    rows: panel.rows().into_iter().map(str::to_string).collect(),
                    placeholder: panel.is_placeholder(),
                },
                profile_menu: ProfileMenuSnapshot {
                    avatar_url: self.config.profile.avatar_url.clone(),
                    open: profile_menu.is_open(),
                    actions: profile_menu.panel().unwrap_or_default().to_vec(),
                },
            },
            report: ReportSnapshot {
                title: self.config.report.title.clone(),
                period: self.config.report.period().label(),
                team_avatars: self.config.report.team_avatars.clone(),
            },
            metrics: self.metric_rows(),
            chart: self.chart.clone(),
            footer: self.config.footer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::FixedSeries;
    use crate::model::Metric;
    use crate::widgets::EMPTY_PLACEHOLDER;
    use proptest::prelude::*;

    fn with_notifications(messages: &[&str]) -> Dashboard {
        let config = Config {
            notifications: messages.iter().map(|m| m.to_string()).collect(),
            ..Config::default()
        };
        Dashboard::mount(config, &FixedSeries::from_values(&[60.0, 70.0, 80.0]))
    }

    #[test]
    fn test_mount_starts_closed() {
        let dashboard = Dashboard::from_config(Config::default());
        assert_eq!(dashboard.notifications_open(), Toggle::Closed);
        assert_eq!(dashboard.profile_menu_open(), Toggle::Closed);
        assert_eq!(dashboard.state().search(), "");
        assert_eq!(dashboard.chart().points.len(), 20);
    }

    #[test]
    fn test_bell_scenario_with_messages() {
        let mut dashboard = with_notifications(&["A", "B", "C"]);

        assert!(dashboard.dispatch(DashboardEvent::ToggleNotifications));
        let header = dashboard.snapshot().header;
        assert!(header.notifications.open);
        assert_eq!(header.notifications.rows, vec!["A", "B", "C"]);
        assert_eq!(header.notifications.badge, Some(3));
        assert!(!header.notifications.placeholder);

        dashboard.dispatch(DashboardEvent::ToggleNotifications);
        let header = dashboard.snapshot().header;
        assert!(!header.notifications.open);
        assert!(header.notifications.rows.is_empty());
        assert_eq!(header.notifications.badge, Some(3));
    }

    #[test]
    fn test_bell_scenario_empty() {
        let mut dashboard = with_notifications(&[]);
        dashboard.dispatch(DashboardEvent::ToggleNotifications);

        let notifications = dashboard.snapshot().header.notifications;
        assert_eq!(notifications.rows, vec![EMPTY_PLACEHOLDER.to_string()]);
        assert_eq!(notifications.badge, None);
        assert!(notifications.placeholder);
    }

    #[test]
    fn test_message_matching_placeholder_text_is_a_real_row() {
        let mut dashboard = with_notifications(&[EMPTY_PLACEHOLDER]);
        dashboard.dispatch(DashboardEvent::ToggleNotifications);

        let notifications = dashboard.snapshot().header.notifications;
        assert_eq!(notifications.rows, vec![EMPTY_PLACEHOLDER.to_string()]);
        assert_eq!(notifications.badge, Some(1));
        assert!(!notifications.placeholder);
    }

    #[test]
    fn test_mount_with_chart_floor_near_u32_max() {
        let config = Config::parse("[chart]\nfloor = 4294967290\nspan = 40\n").unwrap();
        let dashboard = Dashboard::from_config(config);

        let points = &dashboard.chart().points;
        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| p.y >= 4294967290.0));
    }

    #[test]
    fn test_dropdowns_are_independent() {
        let mut dashboard = with_notifications(&["A"]);

        dashboard.dispatch(DashboardEvent::ToggleNotifications);
        assert_eq!(dashboard.profile_menu_open(), Toggle::Closed);

        dashboard.dispatch(DashboardEvent::ToggleProfileMenu);
        assert_eq!(dashboard.notifications_open(), Toggle::Open);
        assert_eq!(dashboard.profile_menu_open(), Toggle::Open);

        let header = dashboard.snapshot().header;
        assert_eq!(header.profile_menu.actions, ProfileAction::all().to_vec());
        assert_eq!(header.notifications.rows, vec!["A"]);
    }

    #[test]
    fn test_search_updates_term() {
        let mut dashboard = with_notifications(&[]);
        assert!(dashboard.dispatch(DashboardEvent::Search("sleep".into())));
        assert!(!dashboard.dispatch(DashboardEvent::Search("sleep".into())));
        assert_eq!(dashboard.snapshot().header.search_term, "sleep");
    }

    #[test]
    fn test_inert_events_change_nothing() {
        let mut dashboard = with_notifications(&["A"]);
        let before = dashboard.state().clone();

        for event in [
            DashboardEvent::SearchSubmit,
            DashboardEvent::Nav("Summary".into()),
            DashboardEvent::HeaderButton("Leaderboard".into()),
            DashboardEvent::ProfileAction(ProfileAction::Logout),
            DashboardEvent::FooterCta,
        ] {
            assert!(!dashboard.dispatch(event));
        }
        assert_eq!(dashboard.state(), &before);
    }

    #[test]
    fn test_snapshot_layout() {
        let snapshot = with_notifications(&[]).snapshot();

        assert_eq!(snapshot.sidebar.nav.len(), 6);
        assert!(snapshot.sidebar.nav[0].active);
        assert!(snapshot.sidebar.nav[1..].iter().all(|n| !n.active));
        assert_eq!(snapshot.sidebar.profile.badge_count, 4);
        assert_eq!(snapshot.header.buttons.len(), 5);
        assert_eq!(snapshot.report.period, "01 - 27 October, 2024");
        assert_eq!(snapshot.metrics[0].value_text(), "89%");
        assert_eq!(snapshot.chart.title, "Health Progress");
        assert_eq!(snapshot.chart.points.len(), 3);
        assert_eq!(snapshot.footer.button, "View Tips");
        assert!(snapshot.header.profile_menu.actions.is_empty());
    }

    #[test]
    fn test_out_of_range_metric_passes_through() {
        let config = Config {
            metrics: vec![Metric::new("Hydration", 150, "Over", "#00bcd4")],
            ..Config::default()
        };
        let dashboard = Dashboard::mount(config, &FixedSeries::default());
        let row = &dashboard.snapshot().metrics[0];
        assert_eq!(row.value_text(), "150%");
        assert_eq!(row.progress().width(), "150%");
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(with_notifications(&["A"]).snapshot()).unwrap();
        assert_eq!(json["header"]["notifications"]["badge"], 1);
        assert_eq!(json["header"]["notifications"]["icon"], "bell");
        assert_eq!(json["metrics"][0]["title"], "Physical Fitness");
    }

    proptest! {
        #[test]
        fn toggles_never_affect_each_other(clicks in prop::collection::vec(any::<bool>(), 0..32)) {
            let mut dashboard = with_notifications(&["A"]);
            let mut bell = 0usize;
            let mut avatar = 0usize;
            for on_bell in clicks {
                if on_bell {
                    dashboard.dispatch(DashboardEvent::ToggleNotifications);
                    bell += 1;
                } else {
                    dashboard.dispatch(DashboardEvent::ToggleProfileMenu);
                    avatar += 1;
                }
            }
            prop_assert_eq!(dashboard.notifications_open().is_open(), bell % 2 == 1);
            prop_assert_eq!(dashboard.profile_menu_open().is_open(), avatar % 2 == 1);
        }
    }
}
