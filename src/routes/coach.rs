// ABOUTME: Staff-only coach console routes for the workout catalog, assignments and nutrition plans
// ABOUTME: Anonymous visitors are sent to login; signed-in non-staff users get a 403
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! Coach console
//!
//! Staff accounts are created with `moreta-cli create-coach`. Every handler
//! here runs behind both [`require_login`] and [`require_staff`].

use std::sync::Arc;

use axum::extract::State;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Router};
use tracing::info;

use super::{field_errors_or, redirect_with_flash};
use crate::constants::{flash, paths};
use crate::errors::{AppResult, FieldErrors};
use crate::forms::{AssignmentForm, NutritionPlanForm, WorkoutForm};
use crate::middleware::{require_login, require_staff, PageContext};
use crate::models::User;
use crate::resources::ServerResources;
use crate::views::coach::{assignment_page, nutrition_plan_page, workout_catalog_page};

/// Coach console routes
pub struct CoachRoutes;

impl CoachRoutes {
    /// Create the coach console routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/coach/workouts/",
                get(Self::handle_workouts).post(Self::handle_create_workout),
            )
            .route(
                "/coach/assignments/",
                get(Self::handle_assignment_form).post(Self::handle_assign),
            )
            .route(
                "/coach/nutrition/",
                get(Self::handle_nutrition_form).post(Self::handle_create_plan),
            )
            .route_layer(middleware::from_fn(require_staff))
            .route_layer(middleware::from_fn(require_login))
            .with_state(resources)
    }

    async fn handle_workouts(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
    ) -> AppResult<Response> {
        let workouts = resources.database.list_workouts().await?;
        Ok(
            workout_catalog_page(&ctx, &workouts, &WorkoutForm::default(), &FieldErrors::new())
                .into_response(),
        )
    }

    async fn handle_create_workout(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(coach): Extension<User>,
        Form(form): Form<WorkoutForm>,
    ) -> AppResult<Response> {
        let errors = match form.parse() {
            Ok(new_workout) => {
                match field_errors_or(resources.database.create_workout(&new_workout).await)? {
                    Ok(workout) => {
                        info!(coach_id = %coach.id, workout_id = workout.id, "Workout created");
                        return Ok(redirect_with_flash(
                            paths::COACH_WORKOUTS,
                            flash::WORKOUT_CREATED,
                        ));
                    }
                    Err(errors) => errors,
                }
            }
            Err(errors) => errors,
        };

        let workouts = resources.database.list_workouts().await?;
        Ok(workout_catalog_page(&ctx, &workouts, &form, &errors).into_response())
    }

    async fn render_assignment_form(
        resources: &ServerResources,
        ctx: &PageContext,
        form: &AssignmentForm,
        errors: &FieldErrors,
    ) -> AppResult<Response> {
        let clients = resources.database.list_clients().await?;
        let workouts = resources.database.list_workouts().await?;
        Ok(assignment_page(ctx, &clients, &workouts, form, errors).into_response())
    }

    async fn handle_assignment_form(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
    ) -> AppResult<Response> {
        Self::render_assignment_form(
            &resources,
            &ctx,
            &AssignmentForm::default(),
            &FieldErrors::new(),
        )
        .await
    }

    async fn handle_assign(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(coach): Extension<User>,
        Form(form): Form<AssignmentForm>,
    ) -> AppResult<Response> {
        let assignment = match field_errors_or(form.resolve(&resources.database).await)? {
            Ok(assignment) => assignment,
            Err(errors) => {
                return Self::render_assignment_form(&resources, &ctx, &form, &errors).await;
            }
        };

        match field_errors_or(resources.database.assign_workout(&assignment).await)? {
            Ok(assigned) => {
                info!(
                    coach_id = %coach.id,
                    client_id = assigned.client_id,
                    workout_id = assigned.workout_id,
                    date = %assigned.assigned_date,
                    "Workout assigned"
                );
                Ok(redirect_with_flash(
                    paths::COACH_ASSIGNMENTS,
                    flash::WORKOUT_ASSIGNED,
                ))
            }
            Err(errors) => Self::render_assignment_form(&resources, &ctx, &form, &errors).await,
        }
    }

    async fn handle_nutrition_form(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
    ) -> AppResult<Response> {
        let clients = resources.database.list_clients().await?;
        Ok(nutrition_plan_page(
            &ctx,
            &clients,
            &NutritionPlanForm::default(),
            &FieldErrors::new(),
        )
        .into_response())
    }

    async fn handle_create_plan(
        State(resources): State<Arc<ServerResources>>,
        Extension(ctx): Extension<PageContext>,
        Extension(coach): Extension<User>,
        Form(form): Form<NutritionPlanForm>,
    ) -> AppResult<Response> {
        let errors = match field_errors_or(form.resolve(&resources.database).await)? {
            Ok(plan) => {
                match field_errors_or(resources.database.create_nutrition_plan(&plan).await)? {
                    Ok(created) => {
                        info!(
                            coach_id = %coach.id,
                            client_id = created.client_id,
                            plan_id = created.id,
                            "Nutrition plan created"
                        );
                        return Ok(redirect_with_flash(
                            paths::COACH_NUTRITION,
                            flash::NUTRITION_CREATED,
                        ));
                    }
                    Err(errors) => errors,
                }
            }
            Err(errors) => errors,
        };

        let clients = resources.database.list_clients().await?;
        Ok(nutrition_plan_page(&ctx, &clients, &form, &errors).into_response())
    }
}
