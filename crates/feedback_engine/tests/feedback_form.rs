use std::sync::Once;
use std::time::Duration;

use feedback_engine::{mount, wait_for, FormConfig, MountedForm, Role, TextMatch, WaitOptions};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(feedback_logging::initialize_for_tests);
}

fn mount_form() -> MountedForm {
    init_logging();
    mount(FormConfig::default())
}

fn pattern(p: &str) -> TextMatch {
    TextMatch::pattern(p).unwrap()
}

#[tokio::test]
async fn renders_heading() {
    let form = mount_form();
    let screen = form.screen();

    let heading = screen
        .get_by_role(Role::Heading, pattern("(?i)обратная связь"))
        .unwrap();
    assert_eq!(heading.text().as_deref(), Some("Обратная связь"));
    assert_eq!(screen.query_all_by_text(pattern("(?i)обратная связь")).len(), 1);
}

#[tokio::test]
async fn keeps_typed_name_and_message() {
    let form = mount_form();
    let screen = form.screen();
    let user = form.user();
    let name_input = screen.get_by_placeholder_text(pattern("(?i)ваше имя")).unwrap();
    let message_input = screen
        .get_by_placeholder_text(pattern("(?i)ваше сообщение"))
        .unwrap();

    user.type_text(&name_input, "Иван").await.unwrap();
    user.type_text(&message_input, "Привет, это тестовое сообщение")
        .await
        .unwrap();

    assert_eq!(name_input.value().as_deref(), Some("Иван"));
    assert_eq!(
        message_input.value().as_deref(),
        Some("Привет, это тестовое сообщение")
    );
}

#[tokio::test]
async fn shows_confirmation_after_valid_submit() {
    let form = mount_form();
    let screen = form.screen();
    let user = form.user();

    user.type_text(&screen.get_by_placeholder_text("Ваше имя").unwrap(), "Иван")
        .await
        .unwrap();
    user.type_text(
        &screen.get_by_placeholder_text("Ваше сообщение").unwrap(),
        "Тестовое сообщение",
    )
    .await
    .unwrap();
    let submit = screen.get_by_role(Role::Button, pattern("(?i)отправить")).unwrap();
    user.click(&submit).await.unwrap();

    // Nothing is shown until the delay elapses.
    assert!(screen.query_by_text(pattern("(?i)спасибо")).unwrap().is_none());
    assert!(submit.is_busy());
    assert!(submit.is_enabled());

    let confirmation = wait_for(
        &screen,
        WaitOptions::with_timeout(Duration::from_millis(2000)),
        |screen| screen.get_by_text(pattern("(?i)Спасибо, Иван!")),
    )
    .await
    .unwrap();
    assert_eq!(confirmation.role(), Role::Status);
    assert_eq!(confirmation.text().as_deref(), Some("Спасибо, Иван!"));
    assert!(!submit.is_busy());
}

#[tokio::test]
async fn no_confirmation_with_empty_name() {
    init_logging();
    let form = mount(FormConfig::with_delay(Duration::from_millis(50)));
    let screen = form.screen();
    let user = form.user();
    let message_input = screen
        .get_by_placeholder_text(pattern("(?i)ваше сообщение"))
        .unwrap();
    let submit = screen.get_by_role(Role::Button, pattern("(?i)отправить")).unwrap();

    user.type_text(&message_input, "Тестовое сообщение").await.unwrap();
    user.click(&submit).await.unwrap();

    wait_for(&screen, WaitOptions::default(), |screen| {
        screen.expect_no_text(pattern("(?i)спасибо"))
    })
    .await
    .unwrap();
    // Still absent well after the confirmation delay would have elapsed.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(screen.query_by_text(pattern("(?i)спасибо")).unwrap().is_none());
    assert!(screen.query_by_role(Role::Status, pattern("")).unwrap().is_none());
}

#[tokio::test]
async fn submit_button_is_enabled() {
    let form = mount_form();
    let submit = form
        .screen()
        .get_by_role(Role::Button, pattern("(?i)отправить"))
        .unwrap();

    assert!(submit.is_connected());
    assert!(submit.is_enabled());
}

#[tokio::test]
async fn whitespace_only_input_is_rejected() {
    init_logging();
    let form = mount(FormConfig::with_delay(Duration::from_millis(50)));
    let screen = form.screen();
    let user = form.user();
    let name_input = screen.get_by_placeholder_text(pattern("(?i)ваше имя")).unwrap();
    let message_input = screen
        .get_by_placeholder_text(pattern("(?i)ваше сообщение"))
        .unwrap();
    let submit = screen.get_by_role(Role::Button, pattern("(?i)отправить")).unwrap();

    user.type_text(&name_input, "   ").await.unwrap();
    user.type_text(&message_input, "   ").await.unwrap();
    user.click(&submit).await.unwrap();

    assert_eq!(name_input.value().as_deref(), Some("   "));
    tokio::time::sleep(Duration::from_millis(200)).await;
    wait_for(&screen, WaitOptions::default(), |screen| {
        screen.expect_no_text(pattern("(?i)спасибо"))
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn typing_into_one_field_leaves_the_other() {
    let form = mount_form();
    let screen = form.screen();
    let user = form.user();
    let name_input = screen.get_by_placeholder_text("Ваше имя").unwrap();
    let message_input = screen.get_by_placeholder_text("Ваше сообщение").unwrap();

    user.type_text(&message_input, "сообщение").await.unwrap();
    user.type_text(&name_input, "Иван").await.unwrap();

    assert_eq!(message_input.value().as_deref(), Some("сообщение"));
    user.clear(&name_input).await.unwrap();
    assert_eq!(name_input.value().as_deref(), Some(""));
    assert_eq!(message_input.value().as_deref(), Some("сообщение"));
}

#[tokio::test]
async fn typing_appends_to_existing_value() {
    let form = mount_form();
    let screen = form.screen();
    let user = form.user();
    let name_input = screen.get_by_placeholder_text("Ваше имя").unwrap();

    user.type_text(&name_input, "Ив").await.unwrap();
    user.type_text(&name_input, "ан").await.unwrap();

    assert_eq!(name_input.value().as_deref(), Some("Иван"));
}

#[tokio::test]
async fn edit_after_confirmation_hides_it_until_next_submit() {
    init_logging();
    let form = mount(FormConfig::with_delay(Duration::from_millis(30)));
    let screen = form.screen();
    let user = form.user();
    let name_input = screen.get_by_placeholder_text("Ваше имя").unwrap();
    let message_input = screen.get_by_placeholder_text("Ваше сообщение").unwrap();
    let submit = screen.get_by_role(Role::Button, "Отправить").unwrap();

    user.type_text(&name_input, "Иван").await.unwrap();
    user.type_text(&message_input, "text").await.unwrap();
    user.click(&submit).await.unwrap();
    wait_for(&screen, WaitOptions::default(), |s| s.get_by_text("Спасибо, Иван!"))
        .await
        .unwrap();

    user.type_text(&name_input, "а").await.unwrap();
    assert!(screen.query_by_text(pattern("(?i)спасибо")).unwrap().is_none());

    user.click(&submit).await.unwrap();
    wait_for(&screen, WaitOptions::default(), |s| s.get_by_text("Спасибо, Ивана!"))
        .await
        .unwrap();
}

#[tokio::test]
async fn debug_dump_lists_controls() {
    let form = mount_form();
    let dump = form.screen().debug().unwrap();

    assert!(dump.contains("Обратная связь"));
    assert!(dump.contains("Ваше сообщение"));
    assert!(dump.contains("\"role\": \"button\""));
}

#[tokio::test]
async fn second_submit_keeps_confirmation_visible() {
    init_logging();
    let form = mount(FormConfig::with_delay(Duration::from_millis(30)));
    let screen = form.screen();
    let user = form.user();
    let submit = screen.get_by_role(Role::Button, "Отправить").unwrap();

    user.type_text(&screen.get_by_placeholder_text("Ваше имя").unwrap(), "Иван")
        .await
        .unwrap();
    user.type_text(&screen.get_by_placeholder_text("Ваше сообщение").unwrap(), "text")
        .await
        .unwrap();
    user.click(&submit).await.unwrap();
    wait_for(&screen, WaitOptions::default(), |s| s.get_by_text("Спасибо, Иван!"))
        .await
        .unwrap();

    user.click(&submit).await.unwrap();
    assert!(screen.query_by_text("Спасибо, Иван!").unwrap().is_some());
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(screen.query_all_by_text("Спасибо, Иван!").len(), 1);
}
