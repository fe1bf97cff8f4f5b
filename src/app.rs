use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::{Action, Direction};
use crate::config::{Config, parse_key};
use crate::system::inventory::{HardwareInventory, detect_host};
use crate::system::process::{ProcessRecord, SortOrder, reconcile_selection, sort_records};
use crate::system::registry::ProcessRegistry;
use crate::system::sampler::MetricSampler;
use crate::system::snapshot::{HostInfo, MetricSnapshot};

const STATUS_MESSAGE_TTL_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Cpu,
    Memory,
    Disks,
    Network,
    Processes,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Cpu,
        Tab::Memory,
        Tab::Disks,
        Tab::Network,
        Tab::Processes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Cpu => "CPU",
            Tab::Memory => "Memory",
            Tab::Disks => "Disks",
            Tab::Network => "Network",
            Tab::Processes => "Processes",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub terminate: KeyCode,
    pub force_terminate: KeyCode,
    pub refresh: KeyCode,
    pub cycle_sort: KeyCode,
    pub help: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            terminate: parse_key(&kb.terminate).unwrap_or(KeyCode::Char('k')),
            force_terminate: parse_key(&kb.force_terminate).unwrap_or(KeyCode::Char('K')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            cycle_sort: parse_key(&kb.cycle_sort).unwrap_or(KeyCode::Char('s')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
        }
    }

    /// Returns (key_label, description) pairs for the help overlay.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.terminate), "Terminate process (cooperative)"),
            (key_label(self.force_terminate), "Force terminate"),
            (key_label(self.refresh), "Refresh process list"),
            (key_label(self.cycle_sort), "Cycle sort order"),
            (key_label(self.help), "Toggle help"),
            ("Tab / ←→".to_string(), "Switch tab"),
            ("1-6".to_string(), "Jump to tab"),
            ("↑↓".to_string(), "Select process"),
            ("Ctrl+C".to_string(), "Quit (always)"),
        ]
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        _ => "?".to_string(),
    }
}

pub struct App {
    pub running: bool,
    pub sampler: MetricSampler,
    pub registry: ProcessRegistry,
    pub snapshot: MetricSnapshot,
    pub processes: Vec<ProcessRecord>,
    /// The display layer's selection; the registry never reads it.
    pub selected_pid: Option<u32>,
    pub tab: Tab,
    pub show_help: bool,
    pub sort_order: SortOrder,
    pub status_message: Option<(String, Instant)>,
    pub host: HostInfo,
    pub inventory: HardwareInventory,
    pub keybinds: ResolvedKeybinds,
    settle_requested: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut sampler = MetricSampler::new();
        let mut registry = ProcessRegistry::new();
        let snapshot = sampler.sample();
        let sort_order = match config.general.default_sort.to_lowercase().as_str() {
            "memory" | "mem" => SortOrder::Memory,
            "name" => SortOrder::Name,
            "pid" => SortOrder::Pid,
            _ => SortOrder::Cpu,
        };
        let mut processes = registry.list();
        sort_records(&mut processes, sort_order);

        App {
            running: true,
            sampler,
            registry,
            snapshot,
            processes,
            selected_pid: None,
            tab: Tab::Overview,
            show_help: false,
            sort_order,
            status_message: None,
            host: detect_host(),
            inventory: HardwareInventory::detect(),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            settle_requested: false,
        }
    }

    /// Fast cycle: replace the current snapshot wholesale.
    pub fn refresh_metrics(&mut self) {
        self.snapshot = self.sampler.sample();

        if let Some((_, created)) = &self.status_message
            && created.elapsed().as_secs() >= STATUS_MESSAGE_TTL_SECS
        {
            self.status_message = None;
        }
    }

    /// Slow cycle: fetch a fresh listing and reconcile the selection.
    pub fn refresh_processes(&mut self) {
        let records = self.registry.list();
        self.apply_listing(records);
    }

    /// Installs a new listing, keeping the selected pid only if it is still
    /// present in the new set.
    pub fn apply_listing(&mut self, mut records: Vec<ProcessRecord>) {
        sort_records(&mut records, self.sort_order);
        self.selected_pid = reconcile_selection(self.selected_pid, &records);
        self.processes = records;
    }

    pub fn selected_index(&self) -> Option<usize> {
        let pid = self.selected_pid?;
        self.processes.iter().position(|r| r.pid == pid)
    }

    /// True once after each termination request; the run loop turns this
    /// into a delayed out-of-band listing refresh.
    pub fn take_settle_request(&mut self) -> bool {
        std::mem::take(&mut self.settle_requested)
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.show_help {
            // Help overlay swallows everything except its dismiss keys.
            if key.code == self.keybinds.help || key.code == KeyCode::Esc {
                return Action::ToggleHelp;
            }
            return Action::None;
        }

        let code = key.code;
        let kb = &self.keybinds;

        // Navigation keys are hardwired (not configurable)
        match code {
            KeyCode::Up => return Action::Navigate(Direction::Up),
            KeyCode::Down => return Action::Navigate(Direction::Down),
            KeyCode::Left | KeyCode::BackTab => return Action::PrevTab,
            KeyCode::Right | KeyCode::Tab => return Action::NextTab,
            KeyCode::Char(c @ '1'..='6') => {
                return Action::SelectTab(c as usize - '1' as usize);
            }
            _ => {}
        }

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.terminate {
            return match self.selected_pid {
                Some(pid) => Action::Terminate(pid),
                None => Action::None,
            };
        }
        if code == kb.force_terminate {
            return match self.selected_pid {
                Some(pid) => Action::ForceTerminate(pid),
                None => Action::None,
            };
        }
        if code == kb.refresh {
            return Action::RefreshProcesses;
        }
        if code == kb.cycle_sort {
            return Action::CycleSort;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }

        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::NextTab => self.tab = self.tab.next(),
            Action::PrevTab => self.tab = self.tab.prev(),
            Action::SelectTab(index) => {
                if let Some(tab) = Tab::ALL.get(index) {
                    self.tab = *tab;
                }
            }
            Action::Navigate(direction) => self.navigate(direction),
            Action::Terminate(pid) => self.terminate(pid, false),
            Action::ForceTerminate(pid) => self.terminate(pid, true),
            Action::RefreshProcesses => self.refresh_processes(),
            Action::CycleSort => {
                self.sort_order = self.sort_order.next();
                let records = std::mem::take(&mut self.processes);
                self.apply_listing(records);
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::None => {}
        }
    }

    fn navigate(&mut self, direction: Direction) {
        if self.tab != Tab::Processes || self.processes.is_empty() {
            return;
        }
        let next_index = match (self.selected_index(), direction) {
            (None, _) => 0,
            (Some(i), Direction::Up) => i.saturating_sub(1),
            (Some(i), Direction::Down) => (i + 1).min(self.processes.len() - 1),
        };
        self.selected_pid = Some(self.processes[next_index].pid);
    }

    fn terminate(&mut self, pid: u32, forceful: bool) {
        let verb = if forceful { "kill" } else { "terminate" };
        match self.registry.terminate(pid, forceful) {
            Ok(()) => {
                self.set_status(format!("requested {verb} of pid {pid}"));
                self.settle_requested = true;
            }
            Err(err) => {
                log::warn!("{verb} pid {pid} failed: {err}");
                self.set_status(format!("cannot {verb} pid {pid}: {err}"));
            }
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::process::ProcessState;

    fn record(pid: u32, name: &str, cpu: f32) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.to_string(),
            state: ProcessState::Running,
            cpu_percent: cpu,
            memory_percent: 1.0,
            owner: Some("tester".to_string()),
        }
    }

    fn test_app() -> App {
        let mut app = App::new(&Config::default());
        app.tab = Tab::Processes;
        app.apply_listing(vec![
            record(10, "alpha", 50.0),
            record(20, "beta", 30.0),
            record(30, "gamma", 10.0),
        ]);
        app
    }

    #[test]
    fn selection_survives_listing_when_pid_present() {
        let mut app = test_app();
        app.selected_pid = Some(20);
        app.apply_listing(vec![record(20, "beta", 5.0), record(40, "delta", 1.0)]);
        assert_eq!(app.selected_pid, Some(20));
    }

    #[test]
    fn selection_clears_when_pid_vanishes() {
        let mut app = test_app();
        app.selected_pid = Some(20);
        app.apply_listing(vec![record(10, "alpha", 5.0), record(30, "gamma", 1.0)]);
        assert_eq!(app.selected_pid, None);
    }

    #[test]
    fn navigate_selects_first_row_when_nothing_selected() {
        let mut app = test_app();
        app.dispatch(Action::Navigate(Direction::Down));
        // cpu sort: alpha(50) first
        assert_eq!(app.selected_pid, Some(10));
    }

    #[test]
    fn navigate_clamps_at_table_edges() {
        let mut app = test_app();
        app.selected_pid = Some(10);
        app.dispatch(Action::Navigate(Direction::Up));
        assert_eq!(app.selected_pid, Some(10));

        app.selected_pid = Some(30);
        app.dispatch(Action::Navigate(Direction::Down));
        assert_eq!(app.selected_pid, Some(30));
    }

    #[test]
    fn terminate_keys_are_inert_without_selection() {
        let app = test_app();
        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);
        let key = KeyEvent::new(KeyCode::Char('K'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);
    }

    #[test]
    fn terminate_keys_target_the_selected_pid() {
        let mut app = test_app();
        app.selected_pid = Some(20);
        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::Terminate(20));
        let key = KeyEvent::new(KeyCode::Char('K'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ForceTerminate(20));
    }

    #[test]
    fn tab_cycle_wraps_both_ways() {
        assert_eq!(Tab::Overview.prev(), Tab::Processes);
        assert_eq!(Tab::Processes.next(), Tab::Overview);
        let mut tab = Tab::Overview;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Overview);
    }

    #[test]
    fn digit_keys_jump_to_tabs() {
        let app = test_app();
        let key = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::SelectTab(2));
    }

    #[test]
    fn help_overlay_blocks_other_keys() {
        let mut app = test_app();
        app.dispatch(Action::ToggleHelp);
        assert!(app.show_help);

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);

        // Dismiss keys still work
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ToggleHelp);

        // Ctrl+C still quits (safety)
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(key), Action::Quit);
    }

    #[test]
    fn failed_terminate_sets_status_without_settle_request() {
        let mut app = test_app();
        // u32::MAX cannot exist; the registry reports NotFound.
        app.dispatch(Action::Terminate(u32::MAX));
        assert!(app.status_message.is_some());
        assert!(!app.take_settle_request());
    }

    #[test]
    fn cycle_sort_reorders_current_listing() {
        let mut app = test_app();
        assert_eq!(app.sort_order, SortOrder::Cpu);
        app.dispatch(Action::CycleSort);
        assert_eq!(app.sort_order, SortOrder::Memory);
        // Listing is still the same set of pids
        assert_eq!(app.processes.len(), 3);
    }
}
