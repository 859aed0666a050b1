//! Repair scenarios driven through the public library API.

use pyqt_fixer::config::FixerConfig;
use pyqt_fixer::environment::PLUGIN_PATH_KEY;
use pyqt_fixer::pip::{PipInvocation, ScriptedPackageManager};
use pyqt_fixer::platform::{PackageLayout, Platform};
use pyqt_fixer::repair::{RepairExecutor, RepairOptions, RepairOutcome, TargetPackages};
use pyqt_fixer::runlog::{LogLevel, MemorySink, Reporter};
use pyqt_fixer::runtime::{PythonRuntime, PythonVersion};
use pyqt_fixer::ui::{BarEvent, MockUI};
use pyqt_fixer::FixerError;
use std::fs;
use tempfile::TempDir;

const PY310: PythonVersion = PythonVersion {
    major: 3,
    minor: 10,
};

struct Scenario {
    _temp: TempDir,
    runtime: PythonRuntime,
    layout: PackageLayout,
    pm: ScriptedPackageManager,
    ui: MockUI,
    sink: MemorySink,
}

impl Scenario {
    fn new(platform: Platform) -> Self {
        let temp = TempDir::new().unwrap();
        let runtime = PythonRuntime::new("python", temp.path(), PY310);
        let layout = PackageLayout::new(platform, temp.path(), PY310, "PyQt5");
        Self {
            _temp: temp,
            runtime,
            layout,
            pm: ScriptedPackageManager::new(),
            ui: MockUI::new(),
            sink: MemorySink::new(),
        }
    }

    fn healthy(platform: Platform) -> Self {
        let scenario = Self::new(platform);
        fs::create_dir_all(scenario.layout.plugin_dir()).unwrap();
        scenario
    }

    fn run(
        &mut self,
        platform: Platform,
        options: RepairOptions,
    ) -> pyqt_fixer::Result<pyqt_fixer::repair::RepairReport> {
        let mut reporter = Reporter::new(&mut self.ui, &mut self.sink);
        RepairExecutor::new(platform, &self.runtime, TargetPackages::default(), &mut self.pm)
            .with_options(options)
            .run(&mut reporter)
    }
}

#[test]
fn windows_layout_uses_lib_site_packages() {
    let mut s = Scenario::healthy(Platform::Windows);
    let report = s.run(Platform::Windows, RepairOptions::default()).unwrap();

    assert_eq!(report.outcome, RepairOutcome::Verified);
    let plugin_dir = report.plugin_dir.unwrap();
    assert!(plugin_dir.ends_with("Lib/site-packages/PyQt5/Qt/plugins/platforms"));
    assert_eq!(
        s.pm.calls()[0].env.get(PLUGIN_PATH_KEY),
        Some(plugin_dir.to_str().unwrap())
    );
    assert!(s.ui.has_progress("set QT_QPA_PLATFORM_PLUGIN_PATH="));
}

#[test]
fn linux_prefix_without_plugins_never_verifies() {
    let mut s = Scenario::new(Platform::Linux);
    fs::create_dir_all(s.layout.package_dir()).unwrap();

    let report = s.run(Platform::Linux, RepairOptions::default()).unwrap();

    assert!(matches!(
        report.outcome,
        RepairOutcome::PluginPathMissing { .. }
    ));
    assert!(s.pm.calls().is_empty());
    assert!(s.sink.contains(LogLevel::Error, "Failed to set Qt plugin path."));
    assert!(!s.sink.contains(LogLevel::Info, "fixed successfully"));
}

#[test]
fn missing_package_installs_target_then_companion_before_configuring() {
    let mut s = Scenario::new(Platform::Linux);

    let report = s.run(Platform::Linux, RepairOptions::default()).unwrap();

    assert!(report.installed_missing);
    assert_eq!(
        s.pm.invocations(),
        vec![
            PipInvocation::install("PyQt5"),
            PipInvocation::install("qtwidgets"),
        ]
    );
    assert!(s.pm.calls().iter().all(|c| c.env.is_empty()));
    assert_eq!(
        s.ui.bar_events(),
        vec![
            BarEvent::Started("Installing PyQt5...".into()),
            BarEvent::Finished("Installing PyQt5... Done.".into()),
            BarEvent::Started("Installing qtwidgets...".into()),
            BarEvent::Finished("Installing qtwidgets... Done.".into()),
        ]
    );
}

#[test]
fn failed_verify_runs_four_reinstall_calls_with_plugin_path() {
    let mut s = Scenario::healthy(Platform::Linux);
    s.pm.set_exit_code(&PipInvocation::show("PyQt5"), 1);

    let report = s.run(Platform::Linux, RepairOptions::default()).unwrap();

    assert_eq!(report.outcome, RepairOutcome::Reinstalled);
    assert_eq!(s.pm.count(&PipInvocation::show("PyQt5")), 1);
    assert_eq!(s.pm.calls().len(), 5);
    assert!(s.pm.calls()[1..]
        .iter()
        .all(|c| c.env.get(PLUGIN_PATH_KEY).is_some()));
    assert_eq!(
        s.sink.messages().last().copied(),
        Some("PyQt5 has been fixed successfully!")
    );
}

#[test]
fn reverify_recovers_when_second_show_passes() {
    let mut s = Scenario::healthy(Platform::Linux);
    s.pm
        .queue_exit_codes(&PipInvocation::show("PyQt5"), vec![1, 0]);

    let options = RepairOptions {
        reverify: true,
        ..Default::default()
    };
    let report = s.run(Platform::Linux, options).unwrap();

    assert_eq!(report.outcome, RepairOutcome::Reinstalled);
    assert_eq!(s.pm.count(&PipInvocation::show("PyQt5")), 2);
    assert!(s.sink.contains(LogLevel::Info, "PyQt5 verified after reinstall."));
}

#[test]
fn uninstall_failure_propagates_tool_exit_code() {
    let mut s = Scenario::healthy(Platform::Linux);
    s.pm.set_exit_code(&PipInvocation::show("PyQt5"), 1);
    s.pm.set_exit_code(&PipInvocation::uninstall("PyQt5"), 2);

    let err = s.run(Platform::Linux, RepairOptions::default()).unwrap_err();

    assert!(matches!(err, FixerError::CommandFailed { code: Some(2), .. }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(s.pm.count(&PipInvocation::install("PyQt5")), 0);
}

#[test]
fn config_without_companion_touches_only_target() {
    let mut s = Scenario::healthy(Platform::Linux);
    s.pm.set_exit_code(&PipInvocation::show("PyQt5"), 1);
    let config = target_only_config();

    let report = {
        let mut reporter = Reporter::new(&mut s.ui, &mut s.sink);
        RepairExecutor::new(Platform::Linux, &s.runtime, config.packages(), &mut s.pm)
            .with_options(config.repair_options())
            .run(&mut reporter)
            .unwrap()
    };

    assert_eq!(report.outcome, RepairOutcome::Reinstalled);
    assert_eq!(
        s.pm.invocations(),
        vec![
            PipInvocation::show("PyQt5"),
            PipInvocation::uninstall("PyQt5"),
            PipInvocation::install("PyQt5"),
        ]
    );
}

fn target_only_config() -> FixerConfig {
    FixerConfig {
        companion: None,
        ..Default::default()
    }
}
