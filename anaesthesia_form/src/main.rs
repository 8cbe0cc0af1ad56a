use libadwaita as adw;
use adw::prelude::*;
use adw::Application;
use anaesthesia_core::{
    allowed_formulations, build_catalog, check_weight, max_dosage, Catalog, Config,
    PatientConditions, DEFAULT_WEIGHT_KG, MAX_WEIGHT_KG, MIN_WEIGHT_KG, WEIGHT_STEP_KG,
};
use gtk::prelude::{BoxExt, ButtonExt, CheckButtonExt, SpinButtonExt, WidgetExt};
use gtk4 as gtk;
use std::rc::Rc;

fn main() {
    anaesthesia_core::logging::init();

    let app = Application::builder()
        .application_id("com.artidose.form")
        .build();

    app.connect_activate(show_evaluator_window);
    app.run();
}

fn show_evaluator_window(app: &Application) {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Config load failed: {}; using defaults.", err);
            Config::default()
        }
    };

    let catalog = match build_catalog(&config) {
        Ok(catalog) => Rc::new(catalog),
        Err(err) => {
            tracing::error!("Failed to build catalog: {}", err);
            return;
        }
    };

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .default_width(560)
        .default_height(680)
        .title("Artidose")
        .build();

    let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    content.set_margin_top(12);
    content.set_margin_bottom(12);
    content.set_margin_start(12);
    content.set_margin_end(12);
    window.set_content(Some(&content));

    let intro = gtk::Label::new(Some(
        "Check all contraindications that apply to the patient:",
    ));
    intro.set_wrap(true);
    intro.set_xalign(0.0);
    content.append(&intro);

    // Sorted for stable display; evaluation itself keeps catalog order
    let mut conditions = catalog.unique_contraindications();
    conditions.sort();

    let checks_box = gtk::Box::new(gtk::Orientation::Vertical, 6);
    let mut checkboxes = Vec::with_capacity(conditions.len());
    for condition in &conditions {
        let check = gtk::CheckButton::with_label(condition);
        checks_box.append(&check);
        checkboxes.push((condition.clone(), check));
    }
    let checkboxes = Rc::new(checkboxes);

    let scrolled = gtk::ScrolledWindow::builder().vexpand(true).build();
    scrolled.set_child(Some(&checks_box));
    content.append(&scrolled);

    let weight_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let weight_label = gtk::Label::new(Some("Body weight (kg):"));
    let weight_spin =
        gtk::SpinButton::with_range(MIN_WEIGHT_KG, MAX_WEIGHT_KG, WEIGHT_STEP_KG);
    weight_spin.set_digits(1);
    weight_spin.set_value(
        check_weight(config.dosing.default_weight_kg).unwrap_or(DEFAULT_WEIGHT_KG),
    );
    weight_row.append(&weight_label);
    weight_row.append(&weight_spin);
    content.append(&weight_row);

    let evaluate = gtk::Button::with_label("Check allowed anaesthesia");
    content.append(&evaluate);

    let results_label = gtk::Label::new(None);
    results_label.set_wrap(true);
    results_label.set_xalign(0.0);
    content.append(&results_label);

    {
        let catalog = catalog.clone();
        let checkboxes = checkboxes.clone();
        let weight_spin = weight_spin.clone();
        let results_label = results_label.clone();
        evaluate.connect_clicked(move |_| {
            let conditions: PatientConditions = checkboxes
                .iter()
                .filter(|(_, check)| check.is_active())
                .map(|(name, _)| name.clone())
                .collect();

            let text = evaluation_text(&catalog, &conditions, weight_spin.value());
            results_label.set_text(&text);
        });
    }

    window.present();
}

/// Render the full evaluation as plain text for the results label.
fn evaluation_text(catalog: &Catalog, conditions: &PatientConditions, weight_kg: f64) -> String {
    let allowed = allowed_formulations(catalog, conditions);

    if allowed.is_empty() {
        return "No Articaine-based anaesthesia is allowed for the given conditions.".into();
    }

    let mut text = String::from("The following anaesthesia types are allowed:\n");
    for formulation in &allowed {
        text.push_str(&format!("• {}\n", formulation.name));
    }

    text.push_str("\nMaximum allowable dosage:\n");
    for result in max_dosage(weight_kg, &allowed) {
        text.push_str(&result.display_line());
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use anaesthesia_core::build_default_catalog;

    #[test]
    fn test_evaluation_text_no_conditions() {
        let catalog = build_default_catalog();
        let text = evaluation_text(&catalog, &PatientConditions::new(), 70.0);

        assert!(text.contains("The following anaesthesia types are allowed:"));
        assert!(text.contains("• Ultracain D- without Adrenaline"));
        assert!(text.contains("490.0 mg"));
    }

    #[test]
    fn test_evaluation_text_nothing_allowed() {
        let catalog = build_default_catalog();
        let conditions: PatientConditions = std::iter::once(
            "Hypersensitivity to Articaine or other amide-type local anaesthetics".to_string(),
        )
        .collect();

        let text = evaluation_text(&catalog, &conditions, 70.0);

        assert!(text.contains("No Articaine-based anaesthesia is allowed"));
        assert!(!text.contains("Maximum allowable dosage"));
    }
}
