mod form;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use webdom::{Document, Key, Modifiers};

use form::{SettingsForm, Step};

fn main() {
    let log_file = File::create("toggle-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::mount(SettingsForm::new());
    print_step(&doc, "initial");

    let steps = [
        Step::Key(Key::Tab),
        Step::Key(Key::Char(' ')),
        Step::Key(Key::Tab),
        Step::Key(Key::Enter),
        Step::Key(Key::Tab),
        Step::Key(Key::Char(' ')),
        Step::Click("density-compact"),
        Step::Blur,
    ];

    for step in steps {
        match step {
            Step::Key(key) => doc.key(key, Modifiers::new()),
            Step::Click(id) => {
                if let Err(e) = doc.click(id) {
                    log::warn!("click on '{}' failed: {}", id, e);
                    eprintln!("Error: {}", e);
                }
            }
            Step::Blur => doc.blur(),
        }
        doc.update(SettingsForm::sync);
        print_step(&doc, &step.to_string());
    }
}

fn print_step(doc: &Document<SettingsForm>, label: &str) {
    log::info!("{} -> focused={:?}", label, doc.focused());
    println!("== {label} (focused: {})", doc.focused().unwrap_or("none"));
    println!("{}", doc.component().summary());
    println!("{}\n", doc.html());
}
