use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons;
use crate::content::{FirmInfo, NavLink};
use crate::nav::PageId;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub firm: FirmInfo,
    pub links: Vec<NavLink>,
    pub on_navigate: Callback<PageId>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { firm, links, on_navigate } = props;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h5>{"Wie Sie uns finden"}</h5>
                    <p>
                        { for firm.address_lines.iter().map(|line| html! { <>{ line }<br /></> }) }
                        <a href={firm.directions_url.clone()} target="_blank" rel="noopener noreferrer" class="footer-directions">
                            {"Anfahrt planen"}
                            { icons::external_link() }
                        </a>
                    </p>
                </div>
                <div>
                    <h5>{"Rechtliches"}</h5>
                    <ul>
                        { for links.iter().map(|link| {
                            let target = link.target;
                            let onclick = on_navigate.reform(move |_: MouseEvent| target);
                            html! {
                                <li><button class="footer-link" {onclick}>{ &link.label }</button></li>
                            }
                        }) }
                    </ul>
                </div>
                <div>
                    <h5>{"Kontakt"}</h5>
                    <p>
                        { format!("T: {}", firm.phone) }<br />
                        { format!("E: {}", firm.email) }
                    </p>
                </div>
            </div>
            <div class="footer-copyright">
                { format!("© {} {}. Alle Rechte vorbehalten.", year, firm.name) }
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #020617;
                    border-top: 1px solid #0f172a;
                    padding: 5rem 1.5rem 2.5rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 3rem;
                    max-width: 80rem;
                    margin: 0 auto 4rem;
                }
                .site-footer h5 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .site-footer p, .site-footer ul {
                    color: #94a3b8;
                    line-height: 1.6;
                    list-style: none;
                    padding: 0;
                }
                .footer-directions {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    margin-top: 0.5rem;
                    color: #38bdf8;
                    text-decoration: none;
                }
                .footer-link {
                    color: inherit;
                    background: none;
                    border: none;
                    padding: 0;
                    margin-bottom: 0.75rem;
                    cursor: pointer;
                }
                .footer-link:hover {
                    color: #60a5fa;
                }
                .footer-copyright {
                    text-align: center;
                    color: #475569;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    border-top: 1px solid #0f172a;
                    padding-top: 2.5rem;
                }
                "#}
            </style>
        </footer>
    }
}
