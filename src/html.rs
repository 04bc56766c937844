use maud::{DOCTYPE, Markup, html};

/// The utility CSS framework, loaded from its CDN build.
const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";

// Button styles
pub const BUTTON_PDF_STYLE: &str = "inline-flex items-center gap-2 px-4 py-2 \
    bg-red-600 hover:bg-red-700 text-white text-sm font-medium rounded";

pub const BUTTON_EXCEL_STYLE: &str = "inline-flex items-center gap-2 px-4 py-2 \
    bg-green-600 hover:bg-green-700 text-white text-sm font-medium rounded";

// Form styles
pub const FORM_CONTROL_STYLE: &str = "border p-2 rounded text-sm text-gray-900 \
    dark:text-white bg-white dark:bg-gray-700 border-gray-300 dark:border-gray-600 \
    focus:ring-blue-600 focus:border-blue-600";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-left border-b text-xs text-gray-700 \
    uppercase bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "border-b bg-white dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-4 py-2";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "p-6 space-y-6 mx-auto max-w-screen-xl text-gray-900 dark:text-white";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Darkwave Pictures" }
                script src=(TAILWIND_SCRIPT) {}
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &content)
}
