use super::prompts::{prompt_string, prompt_yes_no, value_or_prompt};
use super::Context;
use crate::output::Output;
use crate::render;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use moviecritic_models::MovieId;

pub async fn run_list(ctx: &Context, search: Option<String>, output: &Output) -> Result<()> {
    let mut catalog = ctx.catalog();

    // A failed load shows the empty catalog
    if let Err(e) = catalog.load().await {
        output.warn(format!("{} ({})", e, ctx.service.base_url()));
    }

    let query = search.unwrap_or_default();
    let visible = catalog.search(query.clone());
    render::print_movies(output, &visible, &query);
    Ok(())
}

pub async fn run_add(
    ctx: &Context,
    name: Option<String>,
    release_date: Option<String>,
    output: &Output,
) -> Result<()> {
    let mut catalog = ctx.catalog();
    catalog.open_add_movie();

    {
        let form = catalog.movie_form_mut();
        form.name = value_or_prompt(name, "Movie name", None)?;
        form.release_date = value_or_prompt(release_date, "Release date (YYYY-MM-DD)", None)?;
    }

    let movie = catalog.create_movie().await.map_err(|e| eyre!(e.to_string()))?;
    output.success(format!("Added \"{}\" (id {})", movie.name, movie.id));
    Ok(())
}

pub async fn run_edit(
    ctx: &Context,
    id: String,
    name: Option<String>,
    release_date: Option<String>,
    output: &Output,
) -> Result<()> {
    let mut catalog = ctx.catalog();
    catalog.load().await.map_err(|e| eyre!(e.to_string()))?;

    let id = MovieId::new(id);
    catalog.start_edit(&id).map_err(|e| eyre!(e.to_string()))?;

    let form = catalog.movie_form_mut();
    if name.is_none() && release_date.is_none() {
        // Nothing given, so ask for both with the current values prefilled
        form.name = prompt_string("Movie name", Some(&form.name.clone()))?;
        form.release_date = prompt_string("Release date (YYYY-MM-DD)", Some(&form.release_date.clone()))?;
    } else {
        if let Some(name) = name {
            form.name = name;
        }
        if let Some(release_date) = release_date {
            form.release_date = release_date;
        }
    }

    let movie = catalog.update_movie().await.map_err(|e| eyre!(e.to_string()))?;
    output.success(format!("Updated \"{}\" (id {})", movie.name, movie.id));
    Ok(())
}

pub async fn run_delete(ctx: &Context, id: String, yes: bool, output: &Output) -> Result<()> {
    if !yes && !prompt_yes_no(&format!("Delete movie {}?", id), Some(false))? {
        output.info("Cancelled");
        return Ok(());
    }

    let mut catalog = ctx.catalog();
    catalog
        .delete_movie(&MovieId::new(id.clone()))
        .await
        .map_err(|e| eyre!(e.to_string()))?;
    output.success(format!("Deleted movie {}", id));
    Ok(())
}
