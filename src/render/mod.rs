//! Renders the persisted record collection into the daily post document.
//!
//! Pure function of the record list plus three fixed template blocks
//! (style/header, introductory text, closing text). Records are rendered
//! in the order given; no sorting, no deduplication. Scraped titles are
//! untrusted input and are HTML-escaped before embedding.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::Book;

const DOC_HEAD: &str = r#"
    <!DOCTYPE html>
    <html lang="ta">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Kindle Books</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                margin: 20px;
            }
            .paragraph {
                text-align: center;
                font-size: 18px;
                line-height: 1.8;
                margin-bottom: 40px;
            }
            .book-container {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 20px;
            }
            .book-item {
                text-align: center;
                width: 200px;
            }
            .book-item img {
                width: 150px;
                height: auto;
            }
            .book-item a {
                display: block;
                margin-top: 10px;
                font-size: 16px;
                color: #0066cc;
                text-decoration: none;
            }
            .book-item a:hover {
                text-decoration: underline;
            }
        </style>
    </head>
    <body>
    "#;

const INTRO: &str = r#"
    <p class="paragraph">

        <strong>அன்பார்ந்த புத்தக வாசகர்களே!</strong><br><br>
        <strong>அமேசான் <span style='color:orange'>கிண்டிலில்</span></strong> நாள்தோறும் புத்தகங்கள் இலவசமாக வழங்கப்படுகிறது.<br>
        இந்த இலவச புத்தகமானது அந்தந்த ஆசிரியர்களே இலவசமாக வழங்குகின்றனர்.<br><br>
        இந்த இலவச புத்தகங்கள் இந்திய நேரப்படி அறிவித்த நாளில் மதியம் <strong>1:30pm</strong> முதல்
        மறுநாள் மதியம் <strong>1:30pm</strong> வரை செல்லுபடியாகும்.<br>
        <strong style='color: red'>(சில புத்தகங்கள் தொடர்ச்சியாக இலவசமாக கிடைக்கும்)</strong><br>
        அந்த புத்தகங்களை பெற முந்தைய நாள் பதிவுகளையும் காணுங்கள் நன்றி.
<strong>அமேசான் <span style='color:orange'>கிண்டிலில்</span></strong> இருந்து இலவசமாக புத்தகத்தை வாங்குவது எப்படி என்று தெரிந்து கொள்ள
       <strong> <a href="https://receiverindia.blogspot.com/2020/05/how-to-buy-free-books-in-amazon-kindle_7.html">இங்கே கிளிக் செய்யவும்.</strong></a><br><br>

    </p>
    "#;

const OUTRO: &str = r#"
    <p class="paragraph">
        <strong>அமேசான் <span style='color:orange'>கிண்டிலில்</span></strong> இருந்து இலவசமாக புத்தகத்தை வாங்குவது எப்படி என்று தெரிந்து கொள்ள
        <a href="https://receiverindia.blogspot.com/2020/05/how-to-buy-free-books-in-amazon-kindle_7.html">இங்கே கிளிக் செய்யவும்.</a><br><br>
        For our regular updates follow us on social media platforms.<br><br>
        <strong><a href="https://fb.com/receiverindia">Facebook</a> <a href="https://x.com/receiverindia">X</a> <a href="https://instagram.com/receiverindia">Instagram</a> <a href="https://www.youtube.com/@receiverindia">Youtube</a> </strong><br>
        உங்கள் புத்தகத்தை பல வாசகர்களிடம் கொண்டு சேர்க்க இங்கே பதிவிடுங்கள்.<br><br>
        நீங்கள் உங்கள் புத்தகத்தின் லிங்க் மற்றும் இலவச விற்பனைக்கு கொடுத்துள்ள தேதியையும்
        எங்கள் முகநூல் பக்கத்திற்கு அனுப்புங்கள்.<br>
நன்றி மீண்டும் வருக!!!<br>

    </p>
    "#;

const DOC_TAIL: &str = r#"
    </body>
    </html>
    "#;

/// Render the record collection into the complete document.
///
/// Deterministic: identical input produces byte-identical output.
pub fn render(books: &[Book]) -> String {
    let mut html = String::with_capacity(4096 + books.len() * 256);

    html.push_str(DOC_HEAD);
    html.push_str(INTRO);
    html.push_str("<div class=\"book-container\">\n");

    for book in books {
        let title = encode_text(&book.title);
        let alt = encode_double_quoted_attribute(&book.title);
        let link = encode_double_quoted_attribute(book.link.as_deref().unwrap_or(""));
        let image = encode_double_quoted_attribute(book.image_url.as_deref().unwrap_or(""));

        html.push_str(&format!(
            r#"
        <div class="book-item">
            <img src="{image}" alt="{alt}">
            <a href="{link}" target="_blank">{title}</a>
        </div>
        "#
        ));
    }

    html.push_str("</div>\n");
    html.push_str(OUTRO);
    html.push_str(DOC_TAIL);

    html
}
