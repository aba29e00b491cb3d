use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn shelf_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("shelf");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();

    fs::write(
        data_dir.join("items.csv"),
        "asin,brand,title,url,image,rating,reviewUrl,totalReviews,prices\n\
         B0001,Nokia,Nokia 3310 Classic Blue,https://example.com/b0001,img1,4.6,rev1,1234,\"$49.99,$39.99\"\n\
         B0002,Apple,Apple iPhone 8 64GB Space Gray,https://example.com/b0002,img2,4.1,rev2,8000,\"$299.00,$349.00\"\n\
         B0003,Nokia,Nokia 8110 Banana Phone,https://example.com/b0003,img3,3.9,rev3,210,\n\
         B0004,Motorola,Motorola Razr Flip,https://example.com/b0004,img4,oops,rev4,77,$99.50\n",
    )
    .unwrap();

    fs::write(
        data_dir.join("reviews.csv"),
        "asin,name,rating,date,verified,title,body,helpfulVotes\n\
         B0001,alice,5,\"May 1, 2019\",TRUE,Indestructible,Survived a drop from orbit.,12\n\
         B0001,bob,4,\"May 3, 2019\",FALSE,Solid,Battery lasts a week.,3\n\
         B0001,carol,5,\"June 2, 2019\",TRUE,Classic,\"Still the best, decades on.\",5\n\
         B0001,dave,3,\"June 9, 2019\",true,Okay,Snake is fun.,0\n\
         B0002,erin,4,\"July 4, 2019\",TRUE,Good phone,Works as expected.,1\n\
         GHOST,mallory,1,\"July 5, 2019\",TRUE,Lost,This item does not exist.,0\n",
    )
    .unwrap();

    let config_content = format!(
        r#"[catalog]
items = "{root}/data/items.csv"
reviews = "{root}/data/reviews.csv"

[listing]
default_limit = 0
"#,
        root = root.display()
    );

    let config_path = config_dir.join("shelf.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_shelf(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = shelf_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run shelf binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

/// Position of a needle in the output, for order assertions.
fn pos(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{}' not found in output:\n{}", needle, haystack))
}

#[test]
fn test_list_all_items_in_file_order() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_shelf(&config_path, &["list"]);
    assert!(success, "list failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Nokia 3310 Classic Blue"));
    assert!(stdout.contains("Motorola Razr Flip"));
    assert!(pos(&stdout, "B0001") < pos(&stdout, "B0002"));
    assert!(pos(&stdout, "B0002") < pos(&stdout, "B0003"));
}

#[test]
fn test_list_keyword_filter_requires_every_term() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["list", "nokia banana"]);
    assert!(success);
    assert!(stdout.contains("B0003"));
    assert!(!stdout.contains("B0001"));
}

#[test]
fn test_list_brand_filter() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["list", "--brand", "Nokia"]);
    assert!(success);
    assert!(stdout.contains("B0001"));
    assert!(stdout.contains("B0003"));
    assert!(!stdout.contains("B0002"));
    assert!(!stdout.contains("B0004"));
}

#[test]
fn test_list_price_band_excludes_priceless_items() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(
        &config_path,
        &["list", "--min-price", "40", "--max-price", "100"],
    );
    assert!(success);
    // B0001 (39.99-49.99) and B0004 (99.50) fall in the band; B0003 has
    // no prices and never matches a bound; B0002 starts at 299.
    assert!(stdout.contains("B0001"));
    assert!(stdout.contains("B0004"));
    assert!(!stdout.contains("B0002"));
    assert!(!stdout.contains("B0003"));
}

#[test]
fn test_list_price_sort_ascending_ranks_by_minimum() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["list", "--sort", "price"]);
    assert!(success);
    assert!(pos(&stdout, "B0001") < pos(&stdout, "B0004"));
    assert!(pos(&stdout, "B0004") < pos(&stdout, "B0002"));
    // Priceless items sort last.
    assert!(pos(&stdout, "B0002") < pos(&stdout, "B0003"));
}

#[test]
fn test_list_price_sort_descending_ranks_by_maximum() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) =
        run_shelf(&config_path, &["list", "--sort", "price", "--descending"]);
    assert!(success);
    // Descending ranks by each item's highest price, so the order is not
    // the mirror of ascending: B0002 (349) first, priceless B0003 last.
    assert!(pos(&stdout, "B0002") < pos(&stdout, "B0004"));
    assert!(pos(&stdout, "B0004") < pos(&stdout, "B0001"));
    assert!(pos(&stdout, "B0001") < pos(&stdout, "B0003"));
}

#[test]
fn test_list_rating_sort_descending() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(
        &config_path,
        &["list", "--brand", "Nokia", "--sort", "rating", "--descending"],
    );
    assert!(success);
    assert!(pos(&stdout, "B0001") < pos(&stdout, "B0003"));
}

#[test]
fn test_list_unknown_sort_key_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_shelf(&config_path, &["list", "--sort", "helpfulness"]);
    assert!(!success);
    assert!(stderr.contains("Unknown sort key"));
}

#[test]
fn test_list_no_matches_prints_no_results() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["list", "zune"]);
    assert!(success, "an empty result set is not an error");
    assert!(stdout.contains("No results."));
}

#[test]
fn test_list_limit_truncates() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["list", "--limit", "1"]);
    assert!(success);
    assert!(stdout.contains("B0001"));
    assert!(!stdout.contains("B0002"));
}

#[test]
fn test_list_json_output() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["list", "--brand", "Apple", "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["asin"], "B0002");
    assert_eq!(items[0]["prices"][1], 349.0);
}

#[test]
fn test_show_renders_reviews_and_histogram() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_shelf(&config_path, &["show", "B0001"]);
    assert!(success, "show failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Nokia 3310 Classic Blue"));
    assert!(stdout.contains("Rating breakdown:"));
    assert!(stdout.contains("5 star"));
    assert!(stdout.contains("alice"));
    assert!(stdout.contains("Snake is fun."));
    // dave's flag is "true", not "TRUE", so he is unverified.
    assert!(stdout.contains("alice (May 1, 2019) [verified]"));
    assert!(!stdout.contains("dave (June 9, 2019) [verified]"));
    // The orphaned GHOST review belongs to no item.
    assert!(!stdout.contains("mallory"));
}

#[test]
fn test_show_json_histogram_counts() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["show", "B0001", "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["item"]["asin"], "B0001");
    assert_eq!(parsed["reviews"].as_array().unwrap().len(), 4);
    let counts = parsed["histogram"]["counts"].as_array().unwrap();
    assert_eq!(counts[5], 2);
    assert_eq!(counts[4], 1);
    assert_eq!(counts[3], 1);
    assert_eq!(counts[0], 0);
    assert_eq!(parsed["heights"][5], 100.0);
}

#[test]
fn test_show_item_with_no_reviews() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["show", "B0003"]);
    assert!(success, "zero reviews must not be an error");
    assert!(stdout.contains("No reviews."));
}

#[test]
fn test_show_unknown_asin_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_shelf(&config_path, &["show", "B9999"]);
    assert!(!success);
    assert!(stderr.contains("No item with asin"));
}

#[test]
fn test_show_nan_rating_prints_sentinel() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["show", "B0004"]);
    assert!(success, "a malformed rating field must not fail the page");
    assert!(stdout.contains("rating: n/a / 5"));
}

#[test]
fn test_brands_distinct_and_sorted() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["brands"]);
    assert!(success);
    assert!(pos(&stdout, "Apple") < pos(&stdout, "Motorola"));
    assert!(pos(&stdout, "Motorola") < pos(&stdout, "Nokia"));
    assert_eq!(stdout.matches("Nokia").count(), 1);
}

#[test]
fn test_stats_counts_and_orphans() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_shelf(&config_path, &["stats"]);
    assert!(success);
    assert!(stdout.contains("Items:        4"));
    assert!(stdout.contains("Brands:       3"));
    assert!(stdout.contains("Reviews:      6"));
    assert!(stdout.contains("Orphaned:     1"));
    assert!(stdout.contains("Priced:       3 / 4 (75%)"));
}

#[test]
fn test_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("absent.toml");

    let (_, stderr, success) = run_shelf(&config_path, &["list"]);
    assert!(!success);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_missing_data_file_fails() {
    let (_tmp, config_path) = setup_test_env();
    let root = config_path.parent().unwrap().parent().unwrap();
    fs::remove_file(root.join("data/items.csv")).unwrap();

    let (_, stderr, success) = run_shelf(&config_path, &["list"]);
    assert!(!success);
    assert!(stderr.contains("Failed to open catalog file"));
}
