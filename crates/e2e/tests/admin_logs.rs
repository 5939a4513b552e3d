//! Audit-trail scenarios
//!
//! The log viewer is the portal's audit surface: critical actions must
//! append to the logs, logs must be downloadable, and only the admin role
//! may get anywhere near them.

use mediport_e2e::portal::{accounts, links, logs, routes, users};
use mediport_harness::{expect, run_scenario, Result, Session};
use tracing::info;

/// Non-blank line count of a log file's contents.
fn count_log_lines(content: &str) -> usize {
    content.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Open the dropdown, pick a log file, and wait for its contents to load.
/// Returns the chosen file name so the caller can re-select it later.
///
/// Prefers the second-to-last entry: the last file may still be the one
/// the portal is actively writing.
async fn select_log_file(app: &Session) -> Result<String> {
    app.click(&logs::file_dropdown(), "Opening the log file dropdown").await?;

    let buttons = app.wait_for_some(&logs::file_buttons()).await?;
    let chosen = if buttons.len() >= 2 {
        &buttons[buttons.len() - 2]
    } else {
        &buttons[0]
    };
    let name = chosen.text().await?;

    app.forced_click_on(chosen, &format!("Selecting log file '{name}'")).await?;
    app.wait_for_nonempty_value(&logs::content()).await?;
    Ok(name)
}

#[tokio::test]
async fn role_change_appends_one_log_line() -> Result<()> {
    run_scenario("role_change_appends_one_log_line", |app| async move {
        let account = accounts::ADMIN;
        app.login(account.username, account.password, account.role).await?;

        info!("Counting the log lines before the action");
        app.goto(routes::LOG_FILES).await?;
        let file_name = select_log_file(&app).await?;
        let before = count_log_lines(&app.wait_for_nonempty_value(&logs::content()).await?);
        info!("Log file '{file_name}' holds {before} lines");

        info!("Performing a role change to generate a log entry");
        app.goto(routes::USERS).await?;
        app.wait_for(&users::table()).await?;

        let target = accounts::TARGET_USER_ID;
        let select = app.wait_for(&users::role_select(target)).await?;
        let current = select.prop("value").await?.unwrap_or_default();
        let new_role = if current == "patient" { "specialist" } else { "patient" };
        info!("Switching role from '{current}' to '{new_role}'");

        app.select_by_value(&users::role_select(target), new_role, "Selecting the new role")
            .await?;
        app.forced_click(&users::change_button(target), "Clicking 'Change' to save")
            .await?;
        app.wait_for_url_contains(routes::USERS).await?;

        info!("Re-reading '{file_name}' after the action");
        app.goto(routes::LOG_FILES).await?;
        app.type_into(
            &logs::file_dropdown(),
            &file_name,
            "Filtering the dropdown on the original file",
        )
        .await?;
        app.click(&logs::first_file_button(), "Re-selecting the log file").await?;
        let after = count_log_lines(&app.wait_for_nonempty_value(&logs::content()).await?);

        expect!(
            after == before + 1,
            "expected {} log lines after the role change, found {after}",
            before + 1
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn log_file_download_triggers_cleanly() -> Result<()> {
    run_scenario("log_file_download_triggers_cleanly", |app| async move {
        let account = accounts::ADMIN;
        app.login(account.username, account.password, account.role).await?;

        app.goto(routes::LOG_FILES).await?;
        app.wait_for(&logs::file_dropdown()).await?;
        select_log_file(&app).await?;

        app.forced_click(&logs::download_txt_button(), "Triggering the TXT download")
            .await?;

        // The page must stay intact; a server/client failure surfaces as
        // an error alert.
        let errors = app.count_now(&logs::error_alert()).await?;
        expect!(errors == 0, "an error alert appeared after the download");
        expect!(
            app.count_now(&logs::download_txt_button()).await? > 0,
            "log viewer page was lost after the download"
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn admin_reaches_audit_trail_via_menu() -> Result<()> {
    run_scenario("admin_reaches_audit_trail_via_menu", |app| async move {
        let account = accounts::ADMIN;
        app.login(account.username, account.password, account.role).await?;

        let menu = app.wait_for(&links::audit_trail()).await?;
        expect!(
            menu.is_displayed().await?,
            "the audit-trail menu item is not visible for the admin"
        );

        app.click(&links::audit_trail(), "Opening the audit trail from the menu")
            .await?;
        app.wait_for_url_contains(routes::LOG_FILES).await?;
        app.wait_for(&logs::content()).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn health_insurer_cannot_access_logs() -> Result<()> {
    run_scenario("health_insurer_cannot_access_logs", |app| async move {
        let account = accounts::HEALTH_INSURER;
        app.login(account.username, account.password, account.role).await?;

        let menu_items = app.count_now(&links::audit_trail()).await?;
        expect!(
            menu_items == 0,
            "the audit-trail menu item is visible for a health insurer"
        );

        info!("Trying the log viewer URL directly");
        app.goto(routes::LOG_FILES).await?;
        let url = app.wait_for_url_not_contains(routes::LOG_FILES).await?;
        info!("Access attempt was blocked, landed on {url}");
        Ok(())
    })
    .await
}

#[test]
fn log_line_counting_skips_blank_lines() {
    assert_eq!(count_log_lines(""), 0);
    assert_eq!(count_log_lines("\n \n"), 0);
    assert_eq!(count_log_lines("a\nb\n"), 2);
    assert_eq!(count_log_lines("a\n\n  \nb"), 2);
}
