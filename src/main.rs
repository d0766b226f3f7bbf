use std::io::{self, Write};

use log::warn;

use foodies::client::{RecipeApi, SpoonacularClient};
use foodies::config::AppConfig;
use foodies::cuisines::CUISINES;
use foodies::detail::DetailView;
use foodies::render;
use foodies::search::{SearchEvent, SearchView};

/// The two navigable routes of the application.
enum Route {
    List,
    Detail,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    if config.api_key.is_empty() {
        warn!("no API key configured (set FOODIES_API_KEY); requests will be rejected upstream");
    }
    let client = SpoonacularClient::new(&config);

    let mut search = SearchView::new();
    let mut detail = DetailView::new();
    let mut route = Route::List;

    println!("Foodies - Good Food, Good Life!");
    print_help();

    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        let (command, rest) = match input.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "quit" | "q" => break,
            "help" => {
                print_help();
                continue;
            }
            "cuisines" => {
                println!("{}", CUISINES.join(", "));
                continue;
            }
            "search" => {
                search.dispatch(SearchEvent::CommitQuery(rest.to_string()));
                if let Some(ticket) = search.dispatch(SearchEvent::SubmitSearch) {
                    let result = client.search_recipes(&ticket.criteria).await;
                    search.complete(ticket, result);
                }
                route = Route::List;
            }
            "cuisine" => {
                if let Some(ticket) =
                    search.dispatch(SearchEvent::SelectCuisine(rest.to_string()))
                {
                    let result = client.search_recipes(&ticket.criteria).await;
                    search.complete(ticket, result);
                }
                route = Route::List;
            }
            "next" => {
                if let Some(ticket) = search.dispatch(SearchEvent::NextPage) {
                    let result = client.search_recipes(&ticket.criteria).await;
                    search.complete(ticket, result);
                }
                route = Route::List;
            }
            "prev" => {
                if let Some(ticket) = search.dispatch(SearchEvent::PreviousPage) {
                    let result = client.search_recipes(&ticket.criteria).await;
                    search.complete(ticket, result);
                }
                route = Route::List;
            }
            "open" => match rest.parse::<u64>() {
                Ok(id) => {
                    let ticket = detail.show(id);
                    let result = client.fetch_recipe_by_id(ticket.id).await;
                    detail.complete(ticket, result);
                    route = Route::Detail;
                }
                Err(_) => {
                    println!("Usage: open <recipe id>");
                    continue;
                }
            },
            "back" => route = Route::List,
            _ => {
                println!("Unknown command: {} (try `help`)", command);
                continue;
            }
        }

        let page = match route {
            Route::List => render::render_search(&search),
            Route::Detail => render::render_detail(&detail),
        };
        println!("{}", page);
    }

    Ok(())
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 search <words>   search recipes by keyword\n\
         \x20 cuisine <name>   filter by cuisine (empty to clear)\n\
         \x20 cuisines         list supported cuisines\n\
         \x20 next / prev      change result page\n\
         \x20 open <id>        show a recipe's detail page\n\
         \x20 back             return to the result list\n\
         \x20 quit             exit"
    );
}
