/// `QueryParams` usage example
use query_params::{QueryParams, step};

fn main() {
    // Parse the query of the current location
    let href = "https://shop.example/products?category=books&page=3&sort=price#list";
    let mut params = QueryParams::from_href(href);

    // Get values
    println!("category: {:?}", params.get_param("category")); // Some("books")
    println!("missing: {:?}", params.get_param("missing")); // None
    println!();

    // Add a parameter (existing values are kept)
    println!("After add: {}", params.add_param("tag", "sci-fi & fantasy")); // category=books&page=3&sort=price&tag=sci-fi+%26+fantasy
    println!();

    // Add or replace (one value per key)
    println!("After replace: {}", params.add_or_replace_param("page", "1")); // category=books&page=1&sort=price&tag=sci-fi+%26+fantasy
    println!();

    // Several steps, serialized once at the end
    let result = params.compose([
        step(|q| q.remove_param("sort")),
        step(|q| q.add_or_replace_param_list([("view", "grid"), ("page", "2")])),
    ]);
    println!("After compose: {result}"); // category=books&page=2&tag=sci-fi+%26+fantasy&view=grid
    println!();

    // Navigate
    println!("Next href: {}", params.apply_to_href(href));
    println!();

    // Iterate over all parameters
    println!("All parameters:");
    for (key, value) in params.get_all_params() {
        println!("  {} = {}", key, value);
    }
}
