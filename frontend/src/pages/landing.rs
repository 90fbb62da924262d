use log::{info, warn};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::cookie_notice::CookieNotice;
use crate::components::lazy_image::LazyImage;
use crate::components::modal::Modal;
use crate::components::nav::Nav;
use crate::components::reveal::RevealSection;
use crate::components::slider::Slider;
use crate::components::tabs::Operations;
use crate::config;
use crate::dom::scroll_to;
use crate::observer::{use_viewport, ObserveMode};

struct Testimonial {
    heading: &'static str,
    quote: &'static str,
    photo: &'static str,
    name: &'static str,
    location: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        heading: "Best financial decision ever!",
        quote: "Lorem ipsum dolor sit, amet consectetur adipisicing elit. Accusantium quas quisquam non? Quas voluptate nulla minima deleniti optio ullam nesciunt, numquam corporis et asperiores laboriosam sunt, praesentium suscipit blanditiis.",
        photo: "/assets/user-1.jpg",
        name: "Aarav Lynn",
        location: "San Francisco, USA",
    },
    Testimonial {
        heading: "The last step to becoming a complete minimalist",
        quote: "Quisquam itaque deserunt ullam, quia ea repellendus provident, ducimus neque ipsam modi voluptatibus doloremque, corrupti laborum. Incidunt numquam perferendis veritatis neque repellendus.",
        photo: "/assets/user-2.jpg",
        name: "Miyah Miles",
        location: "London, UK",
    },
    Testimonial {
        heading: "Finally free from old-school banks",
        quote: "Debitis, nihil sit minus suscipit magni aperiam vel tenetur incidunt commodi architecto numquam omnis nulla autem, necessitatibus blanditiis modi similique quidem. Odio aliquam culpa dicta beatae quod maiores ipsa minus consequatur error sunt.",
        photo: "/assets/user-3.jpg",
        name: "Francisco Gomes",
        location: "Lisbon, Portugal",
    },
];

struct Feature {
    placeholder: &'static str,
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        placeholder: "/assets/digital-lazy.jpg",
        image: "/assets/digital.jpg",
        alt: "Computer",
        title: "100% digital bank",
        text: "Lorem ipsum dolor sit amet consectetur adipisicing elit. Unde alias sint quos? Accusantium a fugiat porro reiciendis saepe quibusdam debitis ducimus.",
    },
    Feature {
        placeholder: "/assets/grow-lazy.jpg",
        image: "/assets/grow.jpg",
        alt: "Plant",
        title: "Watch your money grow",
        text: "Nesciunt quos autem dolorum voluptates cum dolores dicta fuga inventore ab? Nulla incidunt eius numquam sequi iste pariatur quibusdam!",
    },
    Feature {
        placeholder: "/assets/card-lazy.jpg",
        image: "/assets/card.jpg",
        alt: "Credit card",
        title: "Free debit card included",
        text: "Quasi, fugit in cumque cupiditate reprehenderit debitis animi enim eveniet consequatur odit quam quos possimus assumenda dicta fuga inventore ab.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);
    let header_ref = use_node_ref();
    let nav_ref = use_node_ref();
    let nav_height = use_state_eq(|| 0.0_f64);

    // The sticky margin depends on the rendered nav, so measure it once mounted.
    {
        let nav_ref = nav_ref.clone();
        let nav_height = nav_height.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(nav) = nav_ref.cast::<Element>() {
                    nav_height.set(nav.get_bounding_client_rect().height());
                }
                || ()
            },
            (),
        );
    }

    let header_visible = use_viewport(
        header_ref.clone(),
        config::sticky_header_options(*nav_height),
        ObserveMode::Continuous,
    );

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Opening account modal");
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            info!("Closing account modal");
            modal_open.set(false);
        })
    };

    let scroll_to_features = Callback::from(|_: MouseEvent| {
        if let Err(e) = scroll_to(config::FIRST_SECTION) {
            warn!("could not scroll to features: {}", e);
        }
    });

    html! {
        <div class="landing-page">
            <header class="header" ref={header_ref}>
                <Nav
                    sticky={config::nav_is_sticky(header_visible)}
                    nav_ref={nav_ref}
                    on_open_account={open_modal.clone()}
                />

                <div class="header__title">
                    <h1>
                        {"When "}<span class="highlight">{"banking"}</span>
                        {" meets"}<br />
                        <span class="highlight">{"minimalist"}</span>
                    </h1>
                    <h4>{"A simpler banking experience for a simpler life."}</h4>
                    <button class="btn--text btn--scroll-to" onclick={scroll_to_features}>
                        {"Learn more ↓"}
                    </button>
                    <img src="/assets/hero.png" class="header__img" alt="Minimalist bank items" />
                </div>

                <CookieNotice />
            </header>

            <RevealSection id="section--1">
                <div class="section__title">
                    <h2 class="section__description">{"Features"}</h2>
                    <h3 class="section__header">
                        {"Everything you need in a modern bank and more."}
                    </h3>
                </div>
                <div class="features">
                    { for FEATURES.iter().map(|feature| html! {
                        <>
                            <LazyImage
                                placeholder={feature.placeholder}
                                src={feature.image}
                                alt={feature.alt}
                                class="features__img"
                            />
                            <div class="features__feature">
                                <h5 class="features__header">{ feature.title }</h5>
                                <p>{ feature.text }</p>
                            </div>
                        </>
                    }) }
                </div>
            </RevealSection>

            <RevealSection id="section--2">
                <div class="section__title">
                    <h2 class="section__description">{"Operations"}</h2>
                    <h3 class="section__header">
                        {"Everything as simple as possible, but no simpler."}
                    </h3>
                </div>
                <Operations />
            </RevealSection>

            <RevealSection id="section--3">
                <div class="section__title section__title--testimonials">
                    <h2 class="section__description">{"Not sure yet?"}</h2>
                    <h3 class="section__header">
                        {"Millions of Bankists are already making their lifes simpler."}
                    </h3>
                </div>
                <Slider>
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="testimonial">
                            <h5 class="testimonial__header">{ t.heading }</h5>
                            <blockquote class="testimonial__text">{ t.quote }</blockquote>
                            <address class="testimonial__author">
                                <img src={t.photo} alt="" class="testimonial__photo" />
                                <h6 class="testimonial__name">{ t.name }</h6>
                                <p class="testimonial__location">{ t.location }</p>
                            </address>
                        </div>
                    }) }
                </Slider>
            </RevealSection>

            <RevealSection id="section--sign-up" class="section--sign-up">
                <div class="section__title">
                    <h3 class="section__header">
                        {"The best day to join Bankist was one year ago. The second best is today!"}
                    </h3>
                </div>
                <button class="btn btn--show-modal" onclick={open_modal}>
                    {"Open your free account today!"}
                </button>
            </RevealSection>

            <footer class="footer">
                <p class="footer__copyright">
                    {"Built as a minimalist banking landing page."}
                </p>
            </footer>

            <Modal open={*modal_open} on_close={close_modal} />

            <style>
                {r#"
                    .landing-page {
                        font-family: 'Poppins', sans-serif;
                        font-weight: 300;
                        color: #444;
                        line-height: 1.9;
                        background-color: #f3f3f3;
                    }

                    .highlight {
                        position: relative;
                        color: #5ec576;
                    }

                    .btn {
                        display: inline-block;
                        background-color: #5ec576;
                        font-size: 1.6rem;
                        font-family: inherit;
                        font-weight: 500;
                        border: none;
                        padding: 1.25rem 4.5rem;
                        border-radius: 10rem;
                        cursor: pointer;
                        transition: all 0.1s;
                    }

                    .btn--text {
                        display: inline-block;
                        background: none;
                        font-size: 1.7rem;
                        font-family: inherit;
                        font-weight: 500;
                        color: #5ec576;
                        border: none;
                        border-bottom: 1px solid currentColor;
                        padding-bottom: 2px;
                        cursor: pointer;
                    }

                    .header {
                        padding: 0 3rem;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .header__title {
                        flex: 1;
                        max-width: 115rem;
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        row-gap: 3rem;
                        align-content: center;
                        justify-content: center;
                        align-items: start;
                        justify-items: start;
                    }

                    .header__img {
                        width: 100%;
                        grid-column: 2 / 3;
                        grid-row: 1 / span 4;
                    }

                    .nav {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        height: 9rem;
                        width: 100%;
                        padding: 0 6rem;
                        z-index: 100;
                    }

                    .nav.sticky {
                        position: fixed;
                        background-color: rgba(255, 255, 255, 0.95);
                    }

                    .nav__logo {
                        height: 4.5rem;
                        transition: all 0.3s;
                    }

                    .nav__links {
                        display: flex;
                        align-items: center;
                        list-style: none;
                    }

                    .nav__item {
                        margin-left: 4rem;
                    }

                    .nav__link:link,
                    .nav__link:visited {
                        font-size: 1.7rem;
                        font-weight: 400;
                        color: inherit;
                        text-decoration: none;
                        display: block;
                        transition: all 0.3s;
                    }

                    .nav__link--btn:link,
                    .nav__link--btn:visited {
                        padding: 0.8rem 2.5rem;
                        border-radius: 3rem;
                        background-color: #5ec576;
                        color: #222;
                    }

                    .section {
                        padding: 15rem 3rem;
                        border-top: 1px solid #ddd;
                        transition: transform 1s, opacity 1s;
                    }

                    .section--hidden {
                        opacity: 0;
                        transform: translateY(8rem);
                    }

                    .section__title {
                        max-width: 80rem;
                        margin: 0 auto 8rem auto;
                    }

                    .section__description {
                        font-size: 1.8rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        color: #5ec576;
                        margin-bottom: 1rem;
                    }

                    .section__header {
                        font-size: 4rem;
                        line-height: 1.3;
                        font-weight: 500;
                    }

                    .features {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        margin: 0 12rem;
                    }

                    .features__img {
                        width: 100%;
                    }

                    .lazy-img {
                        filter: blur(20px);
                    }

                    .operations {
                        max-width: 100rem;
                        margin: 12rem auto 0 auto;
                        background-color: #fff;
                    }

                    .operations__tab-container {
                        display: flex;
                        justify-content: center;
                    }

                    .operations__tab {
                        margin-right: 2.5rem;
                        transform: translateY(-50%);
                    }

                    .operations__tab--active {
                        transform: translateY(-66%);
                    }

                    .operations__content {
                        display: none;
                        font-size: 1.7rem;
                        padding: 2.5rem 7rem 6.5rem 7rem;
                    }

                    .operations__content--active {
                        display: grid;
                        grid-template-columns: 7rem 1fr;
                        column-gap: 3rem;
                        row-gap: 0.5rem;
                    }

                    .testimonial {
                        width: 65%;
                        position: relative;
                    }

                    .testimonial__photo {
                        height: 6.5rem;
                        border-radius: 50%;
                    }

                    .section--sign-up {
                        background-color: #37383d;
                        text-align: center;
                    }

                    .section--sign-up .section__header {
                        color: #fff;
                    }

                    .footer {
                        padding: 10rem 3rem;
                        background-color: #37383d;
                        color: #aaa;
                        text-align: center;
                    }

                    .modal {
                        position: fixed;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        max-width: 60rem;
                        background-color: #f3f3f3;
                        padding: 5rem 6rem;
                        box-shadow: 0 4rem 6rem rgba(0, 0, 0, 0.3);
                        z-index: 1000;
                        transition: all 0.5s;
                    }

                    .overlay {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background-color: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                        z-index: 100;
                        transition: all 0.5s;
                    }

                    .modal__form {
                        margin: 0 3rem;
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        align-items: center;
                        gap: 2.5rem;
                    }

                    .btn--close-modal {
                        font-family: inherit;
                        color: inherit;
                        position: absolute;
                        top: 0.5rem;
                        right: 2rem;
                        font-size: 4rem;
                        cursor: pointer;
                        border: none;
                        background: none;
                    }

                    .hidden {
                        visibility: hidden;
                        opacity: 0;
                    }

                    .cookie-message {
                        display: flex;
                        align-items: center;
                        justify-content: space-evenly;
                        width: 100%;
                        background-color: white;
                        color: #bbb;
                        font-size: 1.5rem;
                        font-weight: 400;
                    }
                "#}
            </style>
        </div>
    }
}
