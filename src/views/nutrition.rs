// ABOUTME: Nutrition plans assigned to the signed-in client, newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::fmt::Write as _;

use axum::response::Html;

use super::{escape, render_page};
use crate::middleware::PageContext;
use crate::models::NutritionPlan;

/// `GET /nutrition/`
#[must_use]
pub fn nutrition_page(ctx: &PageContext, plans: &[NutritionPlan]) -> Html<String> {
    let mut content = String::from("<h1>Nutrition plans</h1>");
    if plans.is_empty() {
        content.push_str(
            r#"<section class="card">
<p class="muted">Your coach has not assigned a nutrition plan yet.</p></section>"#,
        );
    }
    for plan in plans {
        let _ = write!(
            content,
            r#"<section class="card">
<h2>{}</h2>
<p class="muted">Created {}</p>
<p>{}</p>
<div class="grid">
<div><div class="muted">Calories</div><div class="stat">{}</div></div>
<div><div class="muted">Protein</div><div class="stat">{}g</div></div>
<div><div class="muted">Carbs</div><div class="stat">{}g</div></div>
<div><div class="muted">Fat</div><div class="stat">{}g</div></div>
</div>
<h3>Meal plan</h3>
<pre>{}</pre>
</section>"#,
            escape(&plan.title),
            plan.created_at.format("%Y-%m-%d"),
            escape(&plan.description),
            plan.daily_calories,
            plan.protein_grams,
            plan.carbs_grams,
            plan.fat_grams,
            escape(&plan.meal_plan),
        );
    }
    render_page("Nutrition", ctx, &content)
}
