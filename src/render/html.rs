//! Self-contained HTML page for a [`Chronology`].
//!
//! Styling is inline; the only external reference is the page icon.

use crate::foundation::utils::escape_html;
use crate::render::{AlbumRow, Chronology};

const BACKGROUND: &str = "#AFCDD3";
const ICON_URL: &str = "https://findicons.com/files/icons/2332/super_mono/64/music.png";
const NO_ALBUMS_MESSAGE: &str =
    "Unable to extract any albums with a full date in the name for sorting.";

pub fn render_html(artist_name: &str, chronology: &Chronology) -> String {
    let artist = escape_html(artist_name);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html><head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>Live Albums ({})</title>\n", artist));
    html.push_str(&format!("<link rel=\"icon\" href=\"{}\">\n", ICON_URL));
    html.push_str(&format!(
        "<style>\n\
         img {{margin: 1em;}}\n\
         html {{background-color: {bg}; font-family: Arial;}}\n\
         #title {{font-size: 250%;}}\n\
         a {{text-decoration: none;}}\n\
         #menu {{float: right; position: fixed; top: 4em; right: 3em; background: {bg};}}\n\
         </style>\n",
        bg = BACKGROUND
    ));
    html.push_str(&format!(
        "</head><body><h1 id=\"title\">{} Live Albums in Chronological Order</h1><table>\n",
        artist
    ));

    for section in &chronology.sections {
        html.push_str(&heading_row(&section.year, &section.year));
        for row in &section.albums {
            html.push_str(&album_row(row));
        }
    }

    if !chronology.undated.is_empty() {
        html.push_str(&heading_row("undated", "Undated (approximate)"));
        for row in &chronology.undated {
            html.push_str(&album_row(row));
        }
    }

    if chronology.empty {
        html.push_str(&format!("<tr><td>{}</td></tr>\n", NO_ALBUMS_MESSAGE));
    }
    html.push_str("</table>\n");

    html.push_str("<div id=\"menu\">\n");
    for bucket in &chronology.years {
        html.push_str(&menu_link(&bucket.year, &bucket.year, bucket.count));
    }
    if !chronology.undated.is_empty() {
        html.push_str(&menu_link("undated", "Undated", chronology.undated.len()));
    }
    html.push_str("</div>\n</body></html>\n");

    html
}

fn heading_row(anchor: &str, label: &str) -> String {
    format!(
        "<tr><td id=\"{}\"><h1>{}</h1><hr></td></tr>\n",
        escape_html(anchor),
        escape_html(label)
    )
}

fn menu_link(anchor: &str, label: &str, count: usize) -> String {
    format!(
        "<a href=\"#{}\"><strong>{} ({})</strong></a><br>\n",
        escape_html(anchor),
        escape_html(label),
        count
    )
}

fn album_row(row: &AlbumRow) -> String {
    let cover = row
        .cover
        .as_ref()
        .map(|c| {
            format!(
                "<img src=\"{}\" width=\"{}\" height=\"{}\">",
                escape_html(&c.url),
                c.width,
                c.height
            )
        })
        .unwrap_or_default();
    format!(
        "<tr><td><a target=\"_blank\" href=\"{}\">{}<br>{}</a><hr></td></tr>\n",
        escape_html(&row.link),
        escape_html(&row.title),
        cover
    )
}
