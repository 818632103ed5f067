use super::prompts::value_or_prompt;
use super::Context;
use crate::output::Output;
use crate::render;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviecritic_core::DetailLoad;
use moviecritic_models::MovieId;

/// Tell the user which half of a detail load failed; the view still renders
pub fn report_load(outcome: &DetailLoad, output: &Output) {
    if let Some(e) = &outcome.movie_error {
        output.warn(format!("Could not load movie: {}", e));
    }
    if let Some(e) = &outcome.reviews_error {
        output.warn(format!("Could not load reviews: {}", e));
    }
}

pub async fn run_show(ctx: &Context, id: String, search: Option<String>, output: &Output) -> Result<()> {
    let mut detail = ctx.detail(MovieId::new(id));
    let outcome = detail.load().await;
    report_load(&outcome, output);

    let query = search.unwrap_or_default();
    detail.search(query.clone());
    render::print_detail(output, detail.movie(), &detail.visible_reviews(), &query);
    Ok(())
}

pub async fn run_review(
    ctx: &Context,
    movie_id: String,
    name: Option<String>,
    rating: Option<String>,
    comments: Option<String>,
    output: &Output,
) -> Result<()> {
    let mut detail = ctx.detail(MovieId::new(movie_id));
    let outcome = detail.load().await;
    report_load(&outcome, output);

    {
        let form = detail.form_mut();
        form.reviewer_name = value_or_prompt(name, "Your name", None)?;
        form.rating = value_or_prompt(rating, "Rating (1-10)", None)?;
        form.comments = value_or_prompt(comments, "Your comments", None)?;
    }

    let review = detail.submit_review().await.map_err(|e| eyre!(e.to_string()))?;
    let title = detail
        .movie()
        .map(|m| m.name.clone())
        .unwrap_or_else(|| format!("movie {}", review.movie_id));
    output.success(format!(
        "Review by {} added for {} ({})",
        review.reviewer_display(),
        title,
        review.rating_display()
    ));
    Ok(())
}
