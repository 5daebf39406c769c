use yew::prelude::*;

/// `(section id, label)` for every in-page nav link.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("problem", "Problem"),
    ("features", "Features"),
    ("how-it-works", "How It Works"),
    ("outcomes", "Outcomes"),
    ("pricing", "Pricing"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub menu_open: bool,
    pub scrolled: bool,
    pub hidden: bool,
    pub active_section: Option<String>,
    pub background: AttrValue,
    pub logo_spinning: bool,
    pub on_toggle: Callback<()>,
    /// Index of the clicked link.
    pub on_link: Callback<usize>,
    pub on_demo: Callback<MouseEvent>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let logo_style = if props.logo_spinning {
        "animation: spin 2s linear infinite;"
    } else {
        ""
    };

    html! {
        <nav
            class={classes!(
                "navbar",
                props.scrolled.then_some("navbar-scrolled"),
                props.hidden.then_some("navbar-hidden"),
            )}
            style={format!("background: {};", props.background)}
        >
            <div class="nav-container">
                <a href="#home" class="logo">
                    <span class="logo-icon" style={logo_style}>{"◉"}</span>
                    <span class="logo-text">{"VoxEasy"}</span>
                </a>
                <ul class={classes!("nav-menu", props.menu_open.then_some("active"))}>
                    {
                        NAV_LINKS.iter().enumerate().map(|(index, (id, label))| {
                            let on_link = props.on_link.clone();
                            let active = props.active_section.as_deref() == Some(*id);
                            html! {
                                <li key={*id}>
                                    <a
                                        href={format!("#{}", id)}
                                        class={classes!("nav-link", active.then_some("active"))}
                                        onclick={Callback::from(move |_: MouseEvent| on_link.emit(index))}
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                    <li>
                        <a href="#" id="openDemoModal" class="nav-cta demo-btn" onclick={props.on_demo.clone()}>
                            {"Book a Demo"}
                        </a>
                    </li>
                </ul>
                <button
                    class={classes!("hamburger", props.menu_open.then_some("active"))}
                    aria-label="Toggle navigation"
                    onclick={on_toggle}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
