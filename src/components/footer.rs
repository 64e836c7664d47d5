use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home} classes="footer-logo">
                            <span class="logo-mark">{"A"}</span>
                            <span class="logo-text">{"Adquira"}<span class="logo-accent">{"Seguidor"}</span></span>
                        </Link<Route>>
                        <p>
                            {"Impulsione suas redes sociais com seguidores, curtidas e \
                              visualizações reais. Entrega rápida e segura."}
                        </p>
                    </div>

                    <div class="footer-column">
                        <h4>{"Navegação"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Home} classes="footer-link">{"Home"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Servicos} classes="footer-link">{"Serviços"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Sobre} classes="footer-link">{"Sobre"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Contato} classes="footer-link">{"Contato"}</Link<Route>></li>
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{"Plataformas"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Servicos} classes="footer-link">{"Instagram"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Servicos} classes="footer-link">{"TikTok"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Servicos} classes="footer-link">{"YouTube"}</Link<Route>></li>
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{"Contato"}</h4>
                        <ul>
                            <li class="footer-contact-item">{"✉ contato@adquiraseguidor.com"}</li>
                            <li class="footer-contact-item">{"💬 WhatsApp"}</li>
                            <li class="footer-contact-item">{"📷 @adquiraseguidor"}</li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{"© 2024 Adquira Seguidor. Todos os direitos reservados."}</p>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        background: #121212;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                    }

                    .footer-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 3rem 1.5rem 2rem;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 2fr 1fr 1fr 1fr;
                        }
                    }

                    .footer-logo {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                        margin-bottom: 1rem;
                    }

                    .logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 10px;
                        background: linear-gradient(135deg, #f2b705, #e0a800);
                        color: #1a1a1a;
                        font-weight: 800;
                        font-size: 1.25rem;
                    }

                    .logo-text {
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.15rem;
                    }

                    .logo-accent {
                        color: #f2b705;
                    }

                    .footer-brand p {
                        color: #999;
                        font-size: 0.9rem;
                        line-height: 1.6;
                        margin: 0;
                    }

                    .footer-column h4 {
                        color: #fff;
                        font-size: 1rem;
                        margin: 0 0 1rem 0;
                    }

                    .footer-column ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .footer-link {
                        color: #999;
                        text-decoration: none;
                        font-size: 0.9rem;
                        transition: color 0.2s ease;
                    }

                    .footer-link:hover {
                        color: #f2b705;
                    }

                    .footer-contact-item {
                        color: #999;
                        font-size: 0.9rem;
                    }

                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        text-align: center;
                    }

                    .footer-bottom p {
                        color: #777;
                        font-size: 0.85rem;
                        margin: 0;
                    }
                "#}
            </style>
        </footer>
    }
}
