use solace_core::error::CoreError;
use solace_core::form::{self, EditMode, Editor};
use solace_core::id::EntityId;
use solace_core::models::assessment::Question;
use solace_core::models::resource::Resource;
use solace_core::models::user::UserRole;
use solace_core::seed;

fn blank_resource() -> Resource {
    let mut r = seed::resources().remove(0);
    r.title.clear();
    r.author = "   ".to_string();
    r
}

#[test]
fn add_prepends_with_a_fresh_id() {
    let mut items = seed::resources();
    let mut draft = items[0].clone();
    draft.title = "Journaling for Beginners".to_string();

    let stored = Editor::add(draft).submit(&mut items).unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0], stored);
    assert!(seed::resources().iter().all(|r| r.id != stored.id));
}

#[test]
fn edit_replaces_in_place_and_keeps_id() {
    let mut items = seed::resources();
    let target = items[1].id;
    let mut draft = items[1].clone();
    draft.id = EntityId(42);
    draft.likes = 7;

    let stored = Editor::edit(target, draft).submit(&mut items).unwrap();

    assert_eq!(stored.id, target);
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].likes, 7);
    assert_eq!(items[1].title, "Guided Sleep Meditation");
}

#[test]
fn edit_of_missing_record_fails() {
    let mut items = seed::resources();
    let draft = items[0].clone();

    let err = Editor::edit(EntityId(1), draft).submit(&mut items).unwrap_err();
    assert!(matches!(err, CoreError::RecordNotFound { id: EntityId(1), .. }));
}

#[test]
fn missing_required_fields_block_submission() {
    let mut items = seed::resources();
    let editor = Editor::add(blank_resource());

    let errors = editor.validate();
    assert!(errors.contains("title"));
    assert!(errors.contains("author"));
    assert_eq!(errors.get("title"), Some("Title is required"));

    let err = editor.submit(&mut items).unwrap_err();
    assert!(matches!(err, CoreError::Validation(e) if e.len() == 2));
    assert_eq!(items.len(), 2);
}

#[test]
fn counsellor_requires_background_fields() {
    let mut user = seed::users().remove(0);
    user.role = UserRole::Counsellor;

    let errors = Editor::add(user.clone()).validate();
    assert!(errors.contains("expertise"));
    assert!(errors.contains("experience"));
    assert!(errors.contains("education"));

    user.role = UserRole::Admin;
    assert!(Editor::add(user).validate().is_empty());
}

#[test]
fn user_accepts_single_name_field() {
    let mut user = seed::users().remove(0);
    user.first_name.clear();
    user.last_name.clear();
    assert!(Editor::add(user.clone()).validate().contains("firstName"));

    user.name = Some("Anita Desai".to_string());
    assert!(Editor::add(user).validate().is_empty());
}

#[test]
fn user_email_must_be_plausible() {
    let mut user = seed::users().remove(0);
    user.email = "not-an-email".to_string();
    let errors = Editor::add(user).validate();
    assert_eq!(errors.get("email"), Some("Email is invalid"));
}

#[test]
fn assessment_questions_need_text_and_two_options() {
    let mut assessment = seed::assessments().remove(0);
    assessment.questions.push(Question {
        text: String::new(),
        options: vec!["Yes".to_string(), " ".to_string()],
    });
    assessment.min_age = 70;

    let errors = Editor::add(assessment).validate();
    assert!(errors.contains("questions[2].text"));
    assert!(errors.contains("questions[2].options"));
    assert!(errors.contains("maxAge"));
}

#[test]
fn remove_drops_only_the_matching_record() {
    let mut items = seed::resources();
    let id = items[0].id;

    let removed = form::remove(&mut items, id).unwrap();
    assert_eq!(removed.id, id);
    assert_eq!(items.len(), 1);
    assert!(form::remove(&mut items, id).is_none());
}

#[test]
fn correcting_the_draft_clears_errors() {
    let mut editor = Editor::add(blank_resource());
    assert_eq!(editor.mode(), EditMode::Add);
    assert!(editor.validate().contains("title"));

    editor.draft_mut().title = "Mindful Walking".to_string();
    editor.draft_mut().author = "Asha Rao".to_string();
    assert!(editor.validate().is_empty());
    assert_eq!(editor.draft().title, "Mindful Walking");

    let mut items = seed::resources();
    let created = editor.submit(&mut items).unwrap();
    assert_eq!(items[0], created);
}
