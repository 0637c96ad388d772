use dto::member_record::MemberRecord;
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

const ERROR_BANNER_SELECTOR: &str =
    r##"font[color="#ff0000"], font[color="#FF0000"], font[color="red"]"##;
const ERROR_MESSAGES: [&str; 2] = ["Error", "Could not retrieve data"];
const HEADER_SELECTOR: &str = r#"font[size="+1"] b"#;
const HEADER_SEPARATOR: &str = ": ";

const REGULAR_RATING_LABEL: &str = "Regular Rating";
const QUICK_RATING_LABEL: &str = "Quick Rating";
const BLITZ_RATING_LABEL: &str = "Blitz Rating";
const STATE_LABEL: &str = "State";
const EXPIRATION_DATE_LABEL: &str = "Expiration Dt.";

#[derive(Default)]
struct Ratings {
    regular: Option<String>,
    quick: Option<String>,
    blitz: Option<String>,
}

/// Extract the member record from a member page.
/// Never fails: whatever can't be found is left absent.
pub fn extract(page_content: &str) -> MemberRecord {
    let document = Html::parse_document(page_content);

    if has_error_banner(&document) {
        warn!("The member page displays an error. Ignoring its content.");
        return MemberRecord::absent();
    }

    let (player_id, player_name) = extract_header(&document);
    let ratings = extract_ratings(&document);
    let player_state = find_labeled_cell(&document, STATE_LABEL)
        .and_then(|cell| bold_text_of_next_cell(&cell))
        .and_then(|text| text.trim().split('\n').nth(1).map(|line| line.trim().to_owned()));
    let expiration_date = find_labeled_cell(&document, EXPIRATION_DATE_LABEL)
        .and_then(|cell| bold_text_of_next_cell(&cell))
        .map(|text| text.trim().to_owned());

    let record = MemberRecord::new(
        player_name,
        player_id,
        player_state,
        ratings.regular,
        ratings.quick,
        ratings.blitz,
        expiration_date,
    );
    debug!("Member record extracted [record: {record:?}]");
    record
}

fn has_error_banner(document: &Html) -> bool {
    let Some(selector) = parse_selector(ERROR_BANNER_SELECTOR) else {
        return false;
    };

    document.select(&selector).any(|banner| {
        let text = text_of(&banner);
        ERROR_MESSAGES.iter().any(|message| text.contains(message))
    })
}

/// Split the page header, formatted as `<id>: <full name>`.
fn extract_header(document: &Html) -> (Option<String>, Option<String>) {
    let header = parse_selector(HEADER_SELECTOR)
        .and_then(|selector| document.select(&selector).next().map(|header| text_of(&header)));

    match header.as_deref() {
        Some(header) => match header.split_once(HEADER_SEPARATOR) {
            Some((id, name)) => (Some(id.to_owned()), Some(name.to_owned())),
            None => {
                debug!("Member page header is malformed [header: {header}]");
                (None, None)
            }
        },
        None => {
            debug!("No header in member page.");
            (None, None)
        }
    }
}

fn extract_ratings(document: &Html) -> Ratings {
    let Some(row_selector) = parse_selector("tr") else {
        return Ratings::default();
    };

    document
        .select(&row_selector)
        .fold(Ratings::default(), |mut ratings, row| {
            let cells = cells_of(&row);
            if cells.len() < 2 {
                return ratings;
            }

            let slot = match text_of(&cells[0]).trim() {
                REGULAR_RATING_LABEL => &mut ratings.regular,
                QUICK_RATING_LABEL => &mut ratings.quick,
                BLITZ_RATING_LABEL => &mut ratings.blitz,
                _ => return ratings,
            };
            // Ratings are published as `1500 (12)`: only the number matters.
            *slot = bold_text_of(&cells[1])
                .and_then(|text| text.split_whitespace().next().map(str::to_owned));
            ratings
        })
}

/// Cells are the `td` and `th` children of a row.
fn cells_of<'a>(row: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|child| matches!(child.value().name(), "td" | "th"))
        .collect()
}

/// Find the innermost cell containing `label`.
/// Cells wrapping a whole nested table also contain the label and are skipped.
fn find_labeled_cell<'a>(document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    let cell_selector = parse_selector("td")?;

    let cell = document.select(&cell_selector).find(|cell| {
        text_of(cell).contains(label)
            && !cell
                .select(&cell_selector)
                .any(|inner_cell| text_of(&inner_cell).contains(label))
    });
    if cell.is_none() {
        debug!("No cell labeled {label} in member page.");
    }
    cell
}

fn bold_text_of_next_cell(cell: &ElementRef) -> Option<String> {
    cell.next_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .and_then(|next_cell| bold_text_of(&next_cell))
}

fn bold_text_of(element: &ElementRef) -> Option<String> {
    let selector = parse_selector("b")?;
    let bold_elements = element.select(&selector).collect::<Vec<_>>();
    if bold_elements.is_empty() {
        None
    } else {
        Some(bold_elements.iter().map(text_of).collect())
    }
}

fn text_of(element: &ElementRef) -> String {
    element.text().collect()
}

fn parse_selector(selector: &str) -> Option<Selector> {
    Selector::parse(selector)
        .map_err(|e| warn!("Selector is malformed [selector: {selector}, error: {e}]"))
        .ok()
}
