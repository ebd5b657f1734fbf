// ABOUTME: End-to-end tests driving the full router with form posts and session cookies
// ABOUTME: Covers access control, auth flows, ownership scoping, coach console and flash handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness
#![allow(clippy::unwrap_used, clippy::too_many_lines)]

mod common;

use chrono::NaiveDate;
use common::{
    body_text, cookie_pair, create_client, create_user, redirect_location, set_cookies, TestApp,
    TEST_PASSWORD,
};
use http::StatusCode;
use moreta_fitness::constants::flash;
use moreta_fitness::forms::login::INVALID_LOGIN_MESSAGE;
use moreta_fitness::models::{
    NewAssignment, NewMessage, NewNutritionPlan, NewProgressEntry, NewWorkout, WorkoutType,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

async fn assigned_workout(app: &TestApp, client_id: i64, day: &str) -> i64 {
    let workout = app
        .database()
        .create_workout(&NewWorkout {
            title: format!("Session {day}"),
            description: "Intervals".into(),
            workout_type: WorkoutType::Hiit,
            duration_minutes: 30,
            difficulty_level: 7,
            instructions: "Sprint and rest".into(),
            video_url: String::new(),
        })
        .await
        .unwrap();
    app.database()
        .assign_workout(&NewAssignment {
            client_id,
            workout_id: workout.id,
            assigned_date: date(day),
            notes: String::new(),
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_public_pages_are_reachable() {
    let app = TestApp::new().await.unwrap();

    assert_eq!(app.get("/", None).await.status(), StatusCode::OK);
    assert_eq!(app.get("/login/", None).await.status(), StatusCode::OK);
    assert_eq!(app.get("/register/", None).await.status(), StatusCode::OK);

    let health = app.get("/health", None).await;
    assert_eq!(health.status(), StatusCode::OK);
    assert!(body_text(health).await.contains("healthy"));
}

#[tokio::test]
async fn test_anonymous_visitors_are_sent_to_login() {
    let app = TestApp::new().await.unwrap();

    for (path, target) in [
        ("/dashboard/", "/login/?next=%2Fdashboard%2F"),
        ("/workout/3/", "/login/?next=%2Fworkout%2F3%2F"),
        ("/coach/workouts/", "/login/?next=%2Fcoach%2Fworkouts%2F"),
    ] {
        let response = app.get(path, None).await;
        assert_eq!(redirect_location(&response), target);
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = TestApp::new().await.unwrap();
    assert_eq!(app.get("/nope/", None).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_security_headers_and_request_id() {
    let app = TestApp::new().await.unwrap();
    let response = app.get("/", None).await;

    let headers = response.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("content-security-policy"));
    assert!(!headers["x-request-id"].is_empty());
}

#[tokio::test]
async fn test_registration_logs_in_and_redirects_to_profile() {
    let app = TestApp::new().await.unwrap();

    let response = app
        .post_form(
            "/register/",
            &[
                ("username", "newclient"),
                ("email", "newclient@example.com"),
                ("first_name", "New"),
                ("last_name", "Client"),
                ("password1", "s3cure-pass"),
                ("password2", "s3cure-pass"),
            ],
            None,
        )
        .await;

    assert_eq!(redirect_location(&response), "/profile/");
    let session = cookie_pair(&response, "auth_token").unwrap();
    assert!(session.len() > "auth_token=".len());
    assert!(cookie_pair(&response, "flash").is_some());

    let user = app
        .database()
        .get_user_by_username("newclient")
        .await
        .unwrap()
        .unwrap();
    assert!(!user.is_staff);
    assert!(app.database().get_profile(user.id).await.unwrap().is_some());

    let profile_page = app.get("/profile/", Some(&session)).await;
    assert_eq!(profile_page.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_registration_re_renders_without_creating_user() {
    let app = TestApp::new().await.unwrap();
    create_user(app.database(), "taken", false).await.unwrap();

    let response = app
        .post_form(
            "/register/",
            &[
                ("username", "TAKEN"),
                ("email", "other@example.com"),
                ("first_name", "Dup"),
                ("last_name", "User"),
                ("password1", "s3cure-pass"),
                ("password2", "different-pass"),
            ],
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response)
        .iter()
        .all(|cookie| !cookie.starts_with("auth_token=")));
    let body = body_text(response).await;
    assert!(body.contains("A user with that username already exists."));
    assert!(!app.database().email_taken("other@example.com").await.unwrap());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials_generically() {
    let app = TestApp::new().await.unwrap();
    let user = create_user(app.database(), "lena", false).await.unwrap();

    let wrong_password = app
        .post_form(
            "/login/",
            &[("username", "lena"), ("password", "not-the-password")],
            None,
        )
        .await;
    assert_eq!(wrong_password.status(), StatusCode::OK);
    assert!(body_text(wrong_password).await.contains(INVALID_LOGIN_MESSAGE));

    app.database().set_user_active(user.id, false).await.unwrap();
    let inactive = app
        .post_form(
            "/login/",
            &[("username", "lena"), ("password", TEST_PASSWORD)],
            None,
        )
        .await;
    assert_eq!(inactive.status(), StatusCode::OK);
    assert!(body_text(inactive).await.contains(INVALID_LOGIN_MESSAGE));
}

#[tokio::test]
async fn test_login_follows_local_next_only() {
    let app = TestApp::new().await.unwrap();
    create_user(app.database(), "mark", false).await.unwrap();

    let response = app
        .post_form(
            "/login/",
            &[
                ("username", "mark"),
                ("password", TEST_PASSWORD),
                ("next", "/progress/"),
            ],
            None,
        )
        .await;
    assert_eq!(redirect_location(&response), "/progress/");
    assert!(cookie_pair(&response, "auth_token").is_some());

    let offsite = app
        .post_form(
            "/login/",
            &[
                ("username", "mark"),
                ("password", TEST_PASSWORD),
                ("next", "https://evil.example/"),
            ],
            None,
        )
        .await;
    assert_eq!(redirect_location(&offsite), "/dashboard/");

    let user = app
        .database()
        .get_user_by_username("mark")
        .await
        .unwrap()
        .unwrap();
    assert!(user.last_login.is_some());
}

#[tokio::test]
async fn test_logout_clears_session_cookie() {
    let app = TestApp::new().await.unwrap();
    let user = create_user(app.database(), "nora", false).await.unwrap();
    let cookie = app.cookie_for(&user);

    let response = app.post_form("/logout/", &[], Some(&cookie)).await;
    assert_eq!(redirect_location(&response), "/");
    let cleared = set_cookies(&response)
        .into_iter()
        .find(|c| c.starts_with("auth_token="))
        .unwrap();
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_workout_detail_and_completion_are_owner_only() {
    let app = TestApp::new().await.unwrap();
    let (owner, owner_profile) = create_client(app.database(), "olga").await.unwrap();
    let (intruder, _) = create_client(app.database(), "pete").await.unwrap();
    let id = assigned_workout(&app, owner_profile.id, "2025-07-01").await;
    let path = format!("/workout/{id}/");

    let owner_cookie = app.cookie_for(&owner);
    let intruder_cookie = app.cookie_for(&intruder);

    assert_eq!(app.get(&path, Some(&owner_cookie)).await.status(), StatusCode::OK);
    assert_eq!(
        app.get(&path, Some(&intruder_cookie)).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.post_form(&path, &[("complete", "1")], Some(&intruder_cookie))
            .await
            .status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get("/workout/abc/", Some(&owner_cookie)).await.status(),
        StatusCode::NOT_FOUND
    );

    let completed = app
        .post_form(&path, &[("complete", "1")], Some(&owner_cookie))
        .await;
    assert_eq!(redirect_location(&completed), "/workouts/");
    let item = app
        .database()
        .get_assignment(owner_profile.id, id)
        .await
        .unwrap()
        .unwrap();
    assert!(item.assignment.completed);

    let page = body_text(app.get(&path, Some(&owner_cookie)).await).await;
    assert!(page.contains("Completed"));
    assert!(!page.contains(r#"name="complete""#));
}

#[tokio::test]
async fn test_progress_detail_is_owner_only_and_dates_are_unique() {
    let app = TestApp::new().await.unwrap();
    let (owner, owner_profile) = create_client(app.database(), "quinn").await.unwrap();
    let (intruder, _) = create_client(app.database(), "rosa").await.unwrap();
    let owner_cookie = app.cookie_for(&owner);

    let created = app
        .post_form(
            "/progress/",
            &[("date", "2025-07-04"), ("weight", "181.5"), ("notes", "")],
            Some(&owner_cookie),
        )
        .await;
    assert_eq!(redirect_location(&created), "/progress/");

    let duplicate = app
        .post_form(
            "/progress/",
            &[("date", "2025-07-04"), ("weight", "180.0")],
            Some(&owner_cookie),
        )
        .await;
    assert_eq!(duplicate.status(), StatusCode::OK);

    let entries = app
        .database()
        .list_progress(owner_profile.id, None)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    let path = format!("/progress/{}/", entries[0].id);

    assert_eq!(app.get(&path, Some(&owner_cookie)).await.status(), StatusCode::OK);
    assert_eq!(
        app.get(&path, Some(&app.cookie_for(&intruder))).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_opening_message_marks_it_read_for_recipient_only() {
    let app = TestApp::new().await.unwrap();
    let coach = create_user(app.database(), "coach", true).await.unwrap();
    let client = create_user(app.database(), "sam", false).await.unwrap();
    let message = app
        .database()
        .send_message(&NewMessage {
            sender_id: coach.id,
            recipient_id: client.id,
            subject: "Plan".into(),
            content: "New plan is up".into(),
        })
        .await
        .unwrap();
    let path = format!("/message/{}/", message.id);

    // The sender cannot open it through the recipient view
    assert_eq!(
        app.get(&path, Some(&app.cookie_for(&coach))).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(app.database().unread_message_count(client.id).await.unwrap(), 1);

    let opened = app.get(&path, Some(&app.cookie_for(&client))).await;
    assert_eq!(opened.status(), StatusCode::OK);
    assert!(body_text(opened).await.contains("New plan is up"));
    assert_eq!(app.database().unread_message_count(client.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_send_message_including_to_self() {
    let app = TestApp::new().await.unwrap();
    let sender = create_user(app.database(), "tina", false).await.unwrap();
    let recipient = create_user(app.database(), "coach", true).await.unwrap();
    let cookie = app.cookie_for(&sender);
    let sender_id = sender.id.to_string();
    let recipient_id = recipient.id.to_string();

    let to_self = app
        .post_form(
            "/send-message/",
            &[
                ("recipient", sender_id.as_str()),
                ("subject", "Me"),
                ("content", "Talking to myself"),
            ],
            Some(&cookie),
        )
        .await;
    assert_eq!(redirect_location(&to_self), "/messages/");

    let sent = app
        .post_form(
            "/send-message/",
            &[
                ("recipient", recipient_id.as_str()),
                ("subject", "Question"),
                ("content", "Can I swap Monday?"),
            ],
            Some(&cookie),
        )
        .await;
    assert_eq!(redirect_location(&sent), "/messages/");

    let inbox = app.database().list_received_messages(recipient.id).await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].sender_username, "tina");

    let own_inbox = app.database().list_received_messages(sender.id).await.unwrap();
    assert_eq!(own_inbox.len(), 1);
    assert_eq!(own_inbox[0].subject, "Me");
    assert_eq!(own_inbox[0].sender_username, "tina");

    let compose = app.get("/send-message/", Some(&cookie)).await;
    let page = body_text(compose).await;
    assert!(page.contains(&format!("value=\"{sender_id}\"")));
}

#[tokio::test]
async fn test_nutrition_lists_own_plans_newest_first() {
    let app = TestApp::new().await.unwrap();
    let (vera, vera_profile) = create_client(app.database(), "vera").await.unwrap();
    let (_, walt_profile) = create_client(app.database(), "walt").await.unwrap();

    let plans = [
        (vera_profile.id, "Winter base"),
        (walt_profile.id, "Walt bulk"),
        (vera_profile.id, "Spring cut"),
    ];
    for (client_id, title) in plans {
        app.database()
            .create_nutrition_plan(&NewNutritionPlan {
                client_id,
                title: title.into(),
                description: "Hit the targets".into(),
                daily_calories: 2100,
                protein_grams: 160,
                carbs_grams: 210,
                fat_grams: 65,
                meal_plan: "Oats\nRice bowl".into(),
            })
            .await
            .unwrap();
    }

    let response = app.get("/nutrition/", Some(&app.cookie_for(&vera))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;

    let newest = page.find("Spring cut").expect("newest plan listed");
    let oldest = page.find("Winter base").expect("older plan listed");
    assert!(newest < oldest);
    assert!(!page.contains("Walt bulk"));
}

#[tokio::test]
async fn test_invalid_profile_height_leaves_profile_unchanged() {
    let app = TestApp::new().await.unwrap();
    let (user, _) = create_client(app.database(), "uma").await.unwrap();
    let cookie = app.cookie_for(&user);

    let fields = |feet: &'static str| {
        vec![
            ("phone", "555-0199"),
            ("current_weight", "160.0"),
            ("target_weight", "150.0"),
            ("height_feet", feet),
            ("height_inches", "6"),
            ("age", "34"),
            ("experience_level", "intermediate"),
            ("fitness_goals", "weight_loss"),
        ]
    };

    let saved = app.post_form("/profile/", &fields("5"), Some(&cookie)).await;
    assert_eq!(redirect_location(&saved), "/dashboard/");

    let rejected = app.post_form("/profile/", &fields("9"), Some(&cookie)).await;
    assert_eq!(rejected.status(), StatusCode::OK);

    let profile = app.database().get_profile(user.id).await.unwrap().unwrap();
    assert_eq!(profile.height_feet, Some(5));
    assert_eq!(profile.height_inches, Some(6));
    assert_eq!(profile.phone, "555-0199");
}

#[tokio::test]
async fn test_flash_is_shown_once_then_cleared() {
    let app = TestApp::new().await.unwrap();
    let user = create_user(app.database(), "vera", false).await.unwrap();
    let cookie = format!("{}; flash=Welcome%20back%21", app.cookie_for(&user));

    let response = app.get("/dashboard/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cleared = set_cookies(&response)
        .into_iter()
        .find(|c| c.starts_with("flash="))
        .unwrap();
    assert!(cleared.contains("Max-Age=0"));
    assert!(body_text(response).await.contains(flash::LOGGED_IN));
}

#[tokio::test]
async fn test_coach_console_is_staff_only() {
    let app = TestApp::new().await.unwrap();
    let (client, _) = create_client(app.database(), "walt").await.unwrap();
    let coach = create_user(app.database(), "headcoach", true).await.unwrap();

    assert_eq!(
        app.get("/coach/workouts/", Some(&app.cookie_for(&client)))
            .await
            .status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.post_form(
            "/coach/workouts/",
            &[("title", "Sneaky")],
            Some(&app.cookie_for(&client))
        )
        .await
        .status(),
        StatusCode::FORBIDDEN
    );
    assert!(app.database().list_workouts().await.unwrap().is_empty());

    let created = app
        .post_form(
            "/coach/workouts/",
            &[
                ("title", "Upper body"),
                ("description", "Push and pull"),
                ("workout_type", "strength"),
                ("duration_minutes", "50"),
                ("difficulty_level", "6"),
                ("instructions", "Bench, rows, dips"),
                ("video_url", ""),
            ],
            Some(&app.cookie_for(&coach)),
        )
        .await;
    assert_eq!(redirect_location(&created), "/coach/workouts/");

    let workouts = app.database().list_workouts().await.unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].title, "Upper body");
}

#[tokio::test]
async fn test_coach_assigns_workout_once_per_day() {
    let app = TestApp::new().await.unwrap();
    let (_, profile) = create_client(app.database(), "xena").await.unwrap();
    let coach = create_user(app.database(), "leadcoach", true).await.unwrap();
    let cookie = app.cookie_for(&coach);
    let workout = app
        .database()
        .create_workout(&NewWorkout {
            title: "Mobility".into(),
            description: "Stretch".into(),
            workout_type: WorkoutType::Flexibility,
            duration_minutes: 20,
            difficulty_level: 2,
            instructions: "Hold each for 30s".into(),
            video_url: String::new(),
        })
        .await
        .unwrap();
    let workout_id = workout.id.to_string();
    let fields = [
        ("client", "xena"),
        ("workout", workout_id.as_str()),
        ("assigned_date", "2025-08-01"),
        ("notes", "Easy day"),
    ];

    let first = app.post_form("/coach/assignments/", &fields, Some(&cookie)).await;
    assert_eq!(redirect_location(&first), "/coach/assignments/");

    let again = app.post_form("/coach/assignments/", &fields, Some(&cookie)).await;
    assert_eq!(again.status(), StatusCode::OK);

    let assignments = app.database().list_assignments(profile.id).await.unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].assignment.notes, "Easy day");
}

#[tokio::test]
async fn test_dashboard_lists_todays_progress_entry() {
    let app = TestApp::new().await.unwrap();
    let (user, profile) = create_client(app.database(), "yara").await.unwrap();
    app.database()
        .create_progress(
            profile.id,
            &NewProgressEntry {
                date: date("2025-05-20"),
                weight: Some(172.4),
                body_fat_percentage: Some(21.25),
                muscle_mass: None,
                notes: "Felt strong".into(),
            },
        )
        .await
        .unwrap();

    let response = app.get("/dashboard/", Some(&app.cookie_for(&user))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("172.4"));
}
