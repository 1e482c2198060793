//! HTML page builders
//!
//! Presentational plumbing only: these functions turn core state and the
//! display helpers' output into escaped HTML strings. No mutation, no
//! routing decisions.

use super::display::{count_incomplete, is_list_complete, sorted_lists, sorted_todos};
use super::types::TodoList;
use crate::session::{Flash, FlashKind};

/// Escape text for interpolation into HTML bodies and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn flash_banner(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => {
            let class = match flash.kind {
                FlashKind::Success => "flash success",
                FlashKind::Error => "flash error",
            };
            format!(
                "<div class=\"{}\">{}</div>\n",
                class,
                escape(&flash.message)
            )
        }
        None => String::new(),
    }
}

/// Shared page skeleton
fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}\n\
         .flash.success {{ color: #166534; }}\n\
         .flash.error {{ color: #991b1b; }}\n\
         .complete {{ text-decoration: line-through; color: #6b7280; }}\n\
         form.inline {{ display: inline; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {flash}{body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        flash = flash_banner(flash),
        body = body,
    )
}

/// GET /lists — overview of all lists, incomplete first
pub fn lists_page(lists: &[TodoList], flash: Option<&Flash>) -> String {
    let mut items = String::new();
    for (list, index) in sorted_lists(lists) {
        let class = if is_list_complete(&list.todos) {
            " class=\"complete\""
        } else {
            ""
        };
        items.push_str(&format!(
            "<li{class}><a href=\"/lists/{index}\">{name}</a> \
             <span>{remaining} / {total}</span></li>\n",
            class = class,
            index = index,
            name = escape(&list.name),
            remaining = count_incomplete(&list.todos),
            total = list.todos.len(),
        ));
    }

    let body = format!(
        "<h1>Todo Lists</h1>\n\
         <ul>\n{items}</ul>\n\
         <p><a href=\"/lists/new\">New List</a></p>",
        items = items,
    );
    layout("Todo Lists", flash, &body)
}

/// GET /lists/new — create form
pub fn new_list_page(flash: Option<&Flash>) -> String {
    let body = "<h1>New List</h1>\n\
         <form method=\"post\" action=\"/lists\">\n\
         <label for=\"list_name\">Enter the name for your new list:</label>\n\
         <input type=\"text\" id=\"list_name\" name=\"list_name\">\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/lists\">Back to lists</a></p>";
    layout("New List", flash, body)
}

/// GET /lists/{i} — one list with its todos, unchecked first
pub fn list_page(index: usize, list: &TodoList, flash: Option<&Flash>) -> String {
    let mut items = String::new();
    for (todo, todo_index) in sorted_todos(&list.todos) {
        let (class, next, label) = if todo.completed {
            (" class=\"complete\"", "false", "Uncheck")
        } else {
            ("", "true", "Check")
        };
        items.push_str(&format!(
            "<li{class}>{name}\n\
             <form class=\"inline\" method=\"post\" action=\"/lists/{index}/todos/{todo_index}\">\n\
             <input type=\"hidden\" name=\"completed\" value=\"{next}\">\n\
             <button type=\"submit\">{label}</button>\n\
             </form>\n\
             <form class=\"inline\" method=\"post\" action=\"/lists/{index}/todos/{todo_index}/delete\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n\
             </li>\n",
            class = class,
            name = escape(&todo.name),
            index = index,
            todo_index = todo_index,
            next = next,
            label = label,
        ));
    }

    let body = format!(
        "<h1>{name}</h1>\n\
         <ul>\n{items}</ul>\n\
         <form method=\"post\" action=\"/lists/{index}/todos\">\n\
         <label for=\"todo\">Enter a new todo item:</label>\n\
         <input type=\"text\" id=\"todo\" name=\"todo\">\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         <form method=\"post\" action=\"/lists/{index}/check_all\">\n\
         <button type=\"submit\">Complete All</button>\n\
         </form>\n\
         <p><a href=\"/lists/{index}/edit\">Edit List</a> | <a href=\"/lists\">Back to lists</a></p>",
        name = escape(&list.name),
        items = items,
        index = index,
    );
    layout(&list.name, flash, &body)
}

/// GET /lists/{i}/edit — rename and delete
pub fn edit_list_page(index: usize, list: &TodoList, flash: Option<&Flash>) -> String {
    let body = format!(
        "<h1>Editing &quot;{name}&quot;</h1>\n\
         <form method=\"post\" action=\"/lists/{index}\">\n\
         <label for=\"list_name\">Enter the new name for the list:</label>\n\
         <input type=\"text\" id=\"list_name\" name=\"list_name\" value=\"{name}\">\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <form method=\"post\" action=\"/lists/{index}/delete\">\n\
         <button type=\"submit\">Delete List</button>\n\
         </form>\n\
         <p><a href=\"/lists/{index}\">Back to list</a></p>",
        name = escape(&list.name),
        index = index,
    );
    layout("Edit List", flash, &body)
}

/// 404 body for out-of-range list or todo indices
pub fn not_found_page(message: &str) -> String {
    let body = format!(
        "<h1>Not Found</h1>\n<p>{}</p>\n<p><a href=\"/lists\">Back to lists</a></p>",
        escape(message)
    );
    layout("Not Found", None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::types::Todo;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>\"a&b\"</b>"),
            "&lt;b&gt;&quot;a&amp;b&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_lists_page_escapes_names() {
        let lists = vec![TodoList::new("<script>alert(1)</script>")];
        let html = lists_page(&lists, None);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_list_page_links_use_original_indices() {
        let mut list = TodoList::new("Chores");
        list.todos.push(Todo {
            name: "done".to_string(),
            completed: true,
        });
        list.todos.push(Todo::new("pending"));

        // List rendered at original position 3; the checked todo keeps its
        // original index 0 even though it displays last
        let html = list_page(3, &list, None);
        assert!(html.contains("action=\"/lists/3/todos/0/delete\""));
        assert!(html.contains("action=\"/lists/3/todos/1\""));
        assert!(html.contains("action=\"/lists/3/check_all\""));
    }

    #[test]
    fn test_flash_rendered_once_in_layout() {
        let flash = Flash::error("List name must be unique.");
        let html = new_list_page(Some(&flash));
        assert!(html.contains("flash error"));
        assert!(html.contains("List name must be unique."));
    }
}
