use super::prompts::{prompt_select, prompt_string, prompt_yes_no};
use super::reviews::report_load;
use super::Context;
use crate::output::Output;
use crate::render;
use color_eyre::Result;
use moviecritic_core::CatalogController;
use moviecritic_models::MovieId;
use moviecritic_remote::HttpDataService;

const CATALOG_ACTIONS: &[&str] = &[
    "Search movies",
    "Open movie",
    "Add movie",
    "Edit movie",
    "Delete movie",
    "Add review",
    "Reload",
    "Quit",
];

const DETAIL_ACTIONS: &[&str] = &["Search reviews", "Add review", "Open another movie", "Back"];

/// Interactive session over the catalog and movie detail screens.
///
/// Validation and write failures are shown as errors and the session
/// continues; the form keeps what was typed so a retry starts from it.
pub async fn run_browse(ctx: &Context, output: &Output) -> Result<()> {
    output.info(format!("Connected to {}", ctx.config.service.base_url));

    let mut catalog = ctx.catalog();
    load_catalog(&mut catalog, output).await;

    loop {
        let query = catalog.state().query.clone();
        render::print_movies(output, &catalog.visible(), &query);

        match prompt_select("What next?", CATALOG_ACTIONS)? {
            0 => {
                let input = prompt_string(&search_prompt("Search by title", &query), None)?;
                catalog.search(next_query(&input));
            }
            1 => {
                if let Some(id) = pick_movie(&catalog, output)? {
                    browse_detail(ctx, &catalog, id, output).await?;
                    // Ratings may have changed while reviewing
                    load_catalog(&mut catalog, output).await;
                }
            }
            2 => add_movie(&mut catalog, output).await?,
            3 => {
                if let Some(id) = pick_movie(&catalog, output)? {
                    edit_movie(&mut catalog, &id, output).await?;
                }
            }
            4 => {
                if let Some(id) = pick_movie(&catalog, output)? {
                    if prompt_yes_no(&format!("Delete movie {}?", id), Some(false))? {
                        match catalog.delete_movie(&id).await {
                            Ok(()) => output.success(format!("Deleted movie {}", id)),
                            Err(e) => output.error(e.to_string()),
                        }
                    }
                }
            }
            5 => add_review(&mut catalog, output).await?,
            6 => load_catalog(&mut catalog, output).await,
            _ => return Ok(()),
        }
    }
}

/// Search prompts carry no default so an empty line clears the filter
fn search_prompt(label: &str, current: &str) -> String {
    if current.is_empty() {
        label.to_string()
    } else {
        format!("{} (now \"{}\", empty to clear)", label, current)
    }
}

fn next_query(input: &str) -> String {
    input.trim().to_string()
}

async fn load_catalog(catalog: &mut CatalogController<HttpDataService>, output: &Output) {
    if let Err(e) = catalog.load().await {
        output.warn(e.to_string());
    }
}

/// Choose from the movies currently visible; `None` on cancel or when the
/// filtered list is empty
fn pick_movie(catalog: &CatalogController<HttpDataService>, output: &Output) -> Result<Option<MovieId>> {
    let choices: Vec<(MovieId, String)> = catalog
        .visible()
        .into_iter()
        .map(|m| (m.id.clone(), format!("{} ({})", m.name, m.release_date_display())))
        .collect();
    choose(&choices, output)
}

fn choose(choices: &[(MovieId, String)], output: &Output) -> Result<Option<MovieId>> {
    if choices.is_empty() {
        output.info(render::NO_MOVIES);
        return Ok(None);
    }

    let mut labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
    labels.push("Cancel");

    let picked = prompt_select("Movie", &labels)?;
    Ok(choices.get(picked).map(|(id, _)| id.clone()))
}

async fn add_movie(catalog: &mut CatalogController<HttpDataService>, output: &Output) -> Result<()> {
    catalog.open_add_movie();

    loop {
        fill_movie_form(catalog)?;
        match catalog.create_movie().await {
            Ok(movie) => {
                output.success(format!("Added \"{}\" (id {})", movie.name, movie.id));
                return Ok(());
            }
            Err(e) => {
                output.error(e.to_string());
                if !prompt_yes_no("Try again?", Some(true))? {
                    catalog.close_form();
                    return Ok(());
                }
            }
        }
    }
}

async fn edit_movie(
    catalog: &mut CatalogController<HttpDataService>,
    id: &MovieId,
    output: &Output,
) -> Result<()> {
    if let Err(e) = catalog.start_edit(id) {
        output.error(e.to_string());
        return Ok(());
    }

    loop {
        fill_movie_form(catalog)?;
        match catalog.update_movie().await {
            Ok(movie) => {
                output.success(format!("Updated \"{}\"", movie.name));
                return Ok(());
            }
            Err(e) => {
                output.error(e.to_string());
                if !prompt_yes_no("Try again?", Some(true))? {
                    catalog.close_form();
                    return Ok(());
                }
            }
        }
    }
}

fn fill_movie_form(catalog: &mut CatalogController<HttpDataService>) -> Result<()> {
    let form = catalog.movie_form_mut();
    form.name = prompt_string("Movie name", Some(&form.name.clone()))?;
    form.release_date = prompt_string("Release date (YYYY-MM-DD)", Some(&form.release_date.clone()))?;
    Ok(())
}

async fn add_review(catalog: &mut CatalogController<HttpDataService>, output: &Output) -> Result<()> {
    // Pick from every loaded movie, not just the search results
    let choices: Vec<(MovieId, String)> = catalog
        .movies()
        .iter()
        .map(|m| (m.id.clone(), m.name.clone()))
        .collect();
    let Some(id) = choose(&choices, output)? else {
        return Ok(());
    };

    catalog.open_add_review();
    catalog.review_form_mut().movie_id = id.to_string();

    loop {
        {
            let form = catalog.review_form_mut();
            form.reviewer_name = prompt_string("Your name", Some(&form.reviewer_name.clone()))?;
            form.rating = prompt_string("Rating (1-10)", Some(&form.rating.clone()))?;
            form.comments = prompt_string("Your comments", Some(&form.comments.clone()))?;
        }

        match catalog.add_review().await {
            Ok(review) => {
                output.success(format!("Review by {} added", review.reviewer_display()));
                return Ok(());
            }
            Err(e) => {
                output.error(e.to_string());
                if !prompt_yes_no("Try again?", Some(true))? {
                    catalog.close_form();
                    return Ok(());
                }
            }
        }
    }
}

async fn browse_detail(
    ctx: &Context,
    catalog: &CatalogController<HttpDataService>,
    id: MovieId,
    output: &Output,
) -> Result<()> {
    let mut detail = ctx.detail(id);
    let outcome = detail.load().await;
    report_load(&outcome, output);

    loop {
        let query = detail.state().query.clone();
        render::print_detail(output, detail.movie(), &detail.visible_reviews(), &query);

        match prompt_select("What next?", DETAIL_ACTIONS)? {
            0 => {
                let input = prompt_string(&search_prompt("Search reviews", &query), None)?;
                detail.search(next_query(&input));
            }
            1 => loop {
                {
                    let form = detail.form_mut();
                    form.reviewer_name = prompt_string("Your name", Some(&form.reviewer_name.clone()))?;
                    form.rating = prompt_string("Rating (1-10)", Some(&form.rating.clone()))?;
                    form.comments = prompt_string("Your comments", Some(&form.comments.clone()))?;
                }

                match detail.submit_review().await {
                    Ok(review) => {
                        output.success(format!("Review by {} added", review.reviewer_display()));
                        break;
                    }
                    Err(e) => {
                        output.error(e.to_string());
                        if !prompt_yes_no("Try again?", Some(true))? {
                            detail.form_mut().clear();
                            break;
                        }
                    }
                }
            },
            2 => {
                let choices: Vec<(MovieId, String)> = catalog
                    .movies()
                    .iter()
                    .map(|m| (m.id.clone(), m.name.clone()))
                    .collect();
                if let Some(next) = choose(&choices, output)? {
                    if let Some(outcome) = detail.navigate(next).await {
                        report_load(&outcome, output);
                    }
                }
            }
            _ => return Ok(()),
        }
    }
}
