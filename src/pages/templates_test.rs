use super::*;

#[test]
fn gallery_holds_eight_distinct_templates() {
    assert_eq!(TEMPLATES.len(), 8);
    let mut ids: Vec<&str> = TEMPLATES.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[test]
fn all_tab_shows_everything() {
    assert_eq!(filter_templates(None).len(), TEMPLATES.len());
}

#[test]
fn category_tabs_filter_strictly() {
    let chill = filter_templates(Some(TemplateCategory::Chill));
    assert_eq!(chill.len(), 2);
    assert!(chill.iter().all(|t| t.category == TemplateCategory::Chill));

    let epic = filter_templates(Some(TemplateCategory::Epic));
    assert_eq!(epic.len(), 1);
    assert_eq!(epic[0].name, "Starfield Drift");
}

#[test]
fn every_category_has_a_template() {
    for category in TemplateCategory::ALL {
        assert!(
            !filter_templates(Some(category)).is_empty(),
            "no templates under {}",
            category.label(),
        );
    }
}

#[test]
fn lookup_by_id() {
    let found = template_by_id("neon-city");
    assert_eq!(found.map(|t| t.name), Some("Neon City"));
    assert!(template_by_id("missing").is_none());
}

#[test]
fn tempos_and_lengths_stay_in_range() {
    for template in TEMPLATES {
        assert!(template.bpm >= 60 && template.bpm <= 180, "{}", template.name);
        assert!(
            template.duration_secs >= 120 && template.duration_secs <= 300,
            "{}",
            template.name,
        );
    }
}
