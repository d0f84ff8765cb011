//! Printable plan export
//!
//! Renders the plan into a standalone HTML document that opens the print
//! dialog once loaded. The browser writes it into a new window; if the window
//! cannot be opened the export silently does nothing, since the plan itself is
//! still in storage.

use crate::models::{FitnessPlan, UserProfile};
use crate::render::{nutrition_line, prescription, slot_heading};

const PRINT_STYLES: &str = r#"
        body { font-family: Arial, sans-serif; padding: 20px; max-width: 800px; margin: 0 auto; }
        h1 { color: #ea580c; border-bottom: 3px solid #ea580c; padding-bottom: 10px; }
        h2 { color: #059669; margin-top: 30px; }
        h3 { color: #d97706; }
        .section { margin-bottom: 30px; }
        .exercise { background: #f3f4f6; padding: 10px; margin: 10px 0; border-radius: 5px; }
        .meal { background: #ecfdf5; padding: 10px; margin: 10px 0; border-radius: 5px; }
        .tip { margin: 10px 0; padding-left: 20px; }
        .motivation { background: linear-gradient(to right, #ea580c, #d97706); color: white; padding: 20px; border-radius: 10px; text-align: center; font-size: 18px; }
        @media print { body { padding: 10px; } }
"#;

/// A freshly opened browsing context the document is written into
pub trait PrintWindow {
    fn write(&mut self, html: &str);
    /// Finish the document; the page's onload handler then opens the dialog
    fn close(&mut self);
}

/// Escape text for HTML element and attribute content
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text on its own italic line
fn emphasis(text: &str) -> String {
    format!("<br><em>{}</em>", escape_html(text))
}

/// Render the printable document
pub fn render_print_document(plan: &FitnessPlan, profile: &UserProfile) -> String {
    let name = escape_html(&profile.name);
    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Fitness Plan - {name}</title>
    <style>{styles}</style>
</head>
<body>
    <h1>Personalized Fitness Plan</h1>
    <div class="section">
        <strong>Name:</strong> {name}<br>
        <strong>Age:</strong> {age} | <strong>Gender:</strong> {gender}<br>
        <strong>Height:</strong> {height}cm | <strong>Weight:</strong> {weight}kg<br>
        <strong>Goal:</strong> {goal} | <strong>Level:</strong> {level}
    </div>

    <div class="motivation">{motivation}</div>

    <h2>Workout Plan</h2>
"#,
        name = name,
        styles = PRINT_STYLES,
        age = profile.age,
        gender = profile.gender,
        height = profile.height_cm,
        weight = profile.weight_kg,
        goal = profile.fitness_goal.label(),
        level = profile.fitness_level,
        motivation = escape_html(&plan.motivation),
    );

    for day in &plan.workout_plan {
        html.push_str("    <div class=\"section\">\n");
        html.push_str(&format!("        <h3>{}</h3>\n", escape_html(&day.day)));
        for ex in &day.exercises {
            html.push_str(&format!(
                "        <div class=\"exercise\"><strong>{}</strong><br>{}",
                escape_html(&ex.name),
                escape_html(&prescription(ex.sets, &ex.reps, &ex.rest_time)),
            ));
            if let Some(notes) = &ex.notes {
                html.push_str(&emphasis(notes));
            }
            html.push_str("</div>\n");
        }
        html.push_str("    </div>\n");
    }

    html.push_str("\n    <h2>Diet Plan</h2>\n");
    for (slot, meal) in plan.diet_plan.meals() {
        html.push_str(&format!(
            "    <div class=\"meal\"><strong>{}</strong><br>{}",
            slot_heading(slot),
            escape_html(&meal.items.join(", ")),
        ));
        if let Some(line) = nutrition_line(meal.calories.as_deref(), meal.protein.as_deref()) {
            html.push_str(&emphasis(&line));
        }
        html.push_str("</div>\n");
    }

    html.push_str("\n    <h2>Lifestyle Tips</h2>\n");
    for (idx, tip) in plan.tips.iter().enumerate() {
        html.push_str(&format!(
            "    <div class=\"tip\">{}. {}</div>\n",
            idx + 1,
            escape_html(tip)
        ));
    }

    html.push_str(
        r#"
    <script>
        window.onload = () => {
            window.print();
        };
    </script>
</body>
</html>
"#,
    );

    html
}

/// Export the plan into a print window, if one can be opened
///
/// Returns whether a document was written.
pub fn export_plan<W, F>(plan: &FitnessPlan, profile: &UserProfile, open: F) -> bool
where
    W: PrintWindow,
    F: FnOnce() -> Option<W>,
{
    let Some(mut window) = open() else {
        return false;
    };
    window.write(&render_print_document(plan, profile));
    window.close();
    true
}
