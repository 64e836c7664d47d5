use yew::prelude::*;
use yew_router::components::Link;

use crate::components::free_trial::FreeTrial;
use crate::Route;

const STEPS: &[(&str, &str, &str)] = &[
    (
        "01",
        "Escolha o Serviço",
        "Selecione a plataforma e o tipo de serviço que você precisa.",
    ),
    (
        "02",
        "Faça o Pagamento",
        "Pague de forma rápida e segura via PIX. Sem burocracia.",
    ),
    (
        "03",
        "Receba em Minutos",
        "Seu pedido é processado automaticamente e entregue rapidamente.",
    ),
    (
        "04",
        "Aproveite os Resultados",
        "Veja seu perfil crescer com engajamento real e de qualidade.",
    ),
];

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "⚡",
        "Entrega Rápida",
        "Processamento automático. Seus serviços começam a ser entregues em minutos.",
    ),
    (
        "💳",
        "Pagamento via PIX",
        "Pague instantaneamente com PIX. Aprovação em segundos, sem esperar.",
    ),
    (
        "🛡️",
        "100% Seguro",
        "Métodos seguros e discretos. Seu perfil está sempre protegido conosco.",
    ),
    (
        "🎧",
        "Suporte 24/7",
        "Equipe sempre pronta para ajudar você em qualquer dúvida ou problema.",
    ),
    (
        "📈",
        "Engajamento Real",
        "Curtidas, seguidores e visualizações de perfis reais e ativos.",
    ),
    (
        "🕐",
        "Disponível 24h",
        "Compre a qualquer hora. Sistema 100% automatizado e sempre online.",
    ),
];

const PLATFORM_CARDS: &[(&str, &str, &str, &[&str])] = &[
    (
        "Instagram",
        "instagram",
        "Seguidores, curtidas, visualizações de stories e reels.",
        &["Seguidores", "Curtidas", "Visualizações", "Comentários"],
    ),
    (
        "TikTok",
        "tiktok",
        "Seguidores, curtidas, visualizações e compartilhamentos.",
        &["Seguidores", "Curtidas", "Visualizações", "Shares"],
    ),
    (
        "YouTube",
        "youtube",
        "Inscritos, visualizações, likes e horas de watch time.",
        &["Inscritos", "Visualizações", "Likes", "Watch Time"],
    ),
];

fn render_hero() -> Html {
    html! {
        <section class="hero-section">
            <div class="hero-content">
                <div class="hero-pill">{"❤ +50.000 clientes satisfeitos"}</div>
                <h1>
                    {"Impulsione Suas "}
                    <span class="hero-underline">{"Redes Sociais"}</span>
                    {" Agora"}
                </h1>
                <p>
                    {"Seguidores, curtidas e visualizações reais para Instagram, TikTok e YouTube. \
                      Entrega rápida, pagamento via PIX e suporte 24h."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Servicos} classes="hero-cta">
                        {"Comprar Serviços →"}
                    </Link<Route>>
                    <Link<Route> to={Route::Sobre} classes="hero-secondary">
                        {"Saiba Mais"}
                    </Link<Route>>
                </div>
                <div class="hero-stats">
                    <div>
                        <p class="stat-value">{"50K+"}</p>
                        <p class="stat-label">{"Clientes"}</p>
                    </div>
                    <div>
                        <p class="stat-value">{"1M+"}</p>
                        <p class="stat-label">{"Serviços Entregues"}</p>
                    </div>
                    <div>
                        <p class="stat-value">{"24/7"}</p>
                        <p class="stat-label">{"Suporte"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_how_it_works() -> Html {
    html! {
        <section class="home-section">
            <div class="section-header">
                <span class="eyebrow">{"Simples e Rápido"}</span>
                <h2>{"Como Funciona"}</h2>
                <p>{"Em apenas 4 passos simples, você impulsiona suas redes sociais e alcança mais pessoas."}</p>
            </div>
            <div class="steps-grid">
                { STEPS.iter().map(|&(number, title, description)| html! {
                    <div class="step-card">
                        <span class="step-number">{number}</span>
                        <h3>{title}</h3>
                        <p>{description}</p>
                    </div>
                }).collect::<Html>() }
            </div>
        </section>
    }
}

fn render_benefits() -> Html {
    html! {
        <section class="home-section">
            <div class="section-header">
                <span class="eyebrow">{"Por que nos escolher"}</span>
                <h2>{"Benefícios Exclusivos"}</h2>
                <p>{"Oferecemos a melhor experiência para impulsionar suas redes sociais com qualidade e segurança."}</p>
            </div>
            <div class="benefits-grid">
                { BENEFITS.iter().map(|&(icon, title, description)| html! {
                    <div class="benefit-card">
                        <div class="benefit-icon">{icon}</div>
                        <h3>{title}</h3>
                        <p>{description}</p>
                    </div>
                }).collect::<Html>() }
            </div>
        </section>
    }
}

fn render_platform_cards() -> Html {
    html! {
        <section class="home-section">
            <div class="section-header">
                <span class="eyebrow">{"Plataformas Suportadas"}</span>
                <h2>{"Escolha Sua Rede Social"}</h2>
                <p>{"Oferecemos serviços para as principais redes sociais. Escolha a plataforma e impulsione seu perfil."}</p>
            </div>
            <div class="platforms-grid">
                { PLATFORM_CARDS.iter().map(|&(name, css_class, description, tags)| html! {
                    <div class="platform-card">
                        <div class={classes!("platform-card-header", css_class)}></div>
                        <div class="platform-card-body">
                            <h3>{name}</h3>
                            <p>{description}</p>
                            <div class="platform-tags">
                                { tags.iter().map(|&tag| html! {
                                    <span class="platform-tag">{tag}</span>
                                }).collect::<Html>() }
                            </div>
                            <Link<Route> to={Route::Servicos} classes="platform-card-link">
                                {"Ver Serviços →"}
                            </Link<Route>>
                        </div>
                    </div>
                }).collect::<Html>() }
            </div>
        </section>
    }
}

fn render_cta() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-content">
                <div class="hero-pill">{"✨ Comece agora mesmo"}</div>
                <h2>{"Pronto para Impulsionar Suas Redes Sociais?"}</h2>
                <p>{"Milhares de clientes já confiam em nós. Escolha seus serviços e comece a crescer hoje mesmo."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Servicos} classes="hero-cta">
                        {"Ver Todos os Serviços →"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contato} classes="hero-secondary">
                        {"Fale Conosco"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            {render_hero()}
            {render_how_it_works()}
            {render_benefits()}
            {render_platform_cards()}
            <FreeTrial />
            {render_cta()}

            <style>
                {r#"
                    .home-page {
                        background: #0f0f0f;
                    }

                    .hero-section {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        background: linear-gradient(160deg, #f2b705 0%, #d9a404 60%, #bf8f03 100%);
                        padding: 7rem 1.5rem 4rem;
                    }

                    .hero-content {
                        max-width: 720px;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .hero-pill {
                        display: inline-block;
                        background: rgba(26, 26, 26, 0.15);
                        color: #1a1a1a;
                        font-size: 0.85rem;
                        font-weight: 600;
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        margin-bottom: 1.5rem;
                    }

                    .hero-section h1 {
                        color: #1a1a1a;
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        line-height: 1.15;
                        margin: 0 0 1.5rem 0;
                    }

                    .hero-underline {
                        text-decoration: underline;
                        text-decoration-color: rgba(26, 26, 26, 0.4);
                        text-underline-offset: 0.35rem;
                    }

                    .hero-section p {
                        color: rgba(26, 26, 26, 0.8);
                        font-size: 1.15rem;
                        margin: 0 0 2rem 0;
                    }

                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .hero-cta {
                        display: inline-block;
                        background: #1a1a1a;
                        color: #f2b705;
                        font-weight: 700;
                        padding: 1rem 2rem;
                        border-radius: 12px;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }

                    .hero-cta:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                    }

                    .hero-secondary {
                        display: inline-block;
                        border: 2px solid #1a1a1a;
                        color: #1a1a1a;
                        font-weight: 600;
                        padding: 1rem 2rem;
                        border-radius: 12px;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }

                    .hero-secondary:hover {
                        background: #1a1a1a;
                        color: #f2b705;
                    }

                    .hero-stats {
                        display: flex;
                        justify-content: center;
                        gap: 3rem;
                        margin-top: 3rem;
                    }

                    .stat-value {
                        color: #1a1a1a;
                        font-size: 1.75rem;
                        font-weight: 800;
                        margin: 0;
                    }

                    .stat-label {
                        color: rgba(26, 26, 26, 0.7);
                        font-size: 0.85rem;
                        margin: 0;
                    }

                    .home-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                    }

                    .section-header {
                        text-align: center;
                        margin-bottom: 3.5rem;
                    }

                    .eyebrow {
                        display: inline-block;
                        color: #f2b705;
                        font-size: 0.8rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 0.75rem;
                    }

                    .section-header h2 {
                        color: #fff;
                        font-size: 2.25rem;
                        margin: 0 0 1rem 0;
                    }

                    .section-header p {
                        color: #999;
                        max-width: 36rem;
                        margin: 0 auto;
                    }

                    .steps-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .steps-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .steps-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }

                    .step-card {
                        background: #161616;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.5rem;
                        transition: all 0.3s ease;
                    }

                    .step-card:hover {
                        border-color: rgba(242, 183, 5, 0.5);
                        box-shadow: 0 0 30px rgba(242, 183, 5, 0.1);
                    }

                    .step-number {
                        display: block;
                        color: rgba(242, 183, 5, 0.3);
                        font-size: 2.25rem;
                        font-weight: 800;
                        margin-bottom: 0.75rem;
                    }

                    .step-card h3,
                    .benefit-card h3 {
                        color: #fff;
                        font-size: 1.15rem;
                        margin: 0 0 0.5rem 0;
                    }

                    .step-card p,
                    .benefit-card p {
                        color: #999;
                        font-size: 0.9rem;
                        line-height: 1.5;
                        margin: 0;
                    }

                    .benefits-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .benefits-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .benefits-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .benefit-card {
                        background: #161616;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.5rem;
                        transition: all 0.3s ease;
                    }

                    .benefit-card:hover {
                        border-color: rgba(242, 183, 5, 0.5);
                        box-shadow: 0 0 40px rgba(242, 183, 5, 0.1);
                    }

                    .benefit-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        border-radius: 12px;
                        background: rgba(242, 183, 5, 0.1);
                        margin-bottom: 1.25rem;
                    }

                    .platforms-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    @media (min-width: 768px) {
                        .platforms-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .platform-card {
                        background: #161616;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 20px;
                        overflow: hidden;
                        transition: all 0.4s ease;
                    }

                    .platform-card:hover {
                        border-color: rgba(242, 183, 5, 0.5);
                        transform: translateY(-6px);
                        box-shadow: 0 0 50px rgba(242, 183, 5, 0.15);
                    }

                    .platform-card-header {
                        height: 8rem;
                    }

                    .platform-card-header.instagram {
                        background: linear-gradient(135deg, #ec4899, #9333ea);
                    }

                    .platform-card-header.tiktok {
                        background: linear-gradient(135deg, #22d3ee, #ec4899);
                    }

                    .platform-card-header.youtube {
                        background: linear-gradient(135deg, #ef4444, #dc2626);
                    }

                    .platform-card-body {
                        padding: 1.5rem;
                    }

                    .platform-card-body h3 {
                        color: #fff;
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem 0;
                    }

                    .platform-card-body > p {
                        color: #999;
                        font-size: 0.9rem;
                        margin: 0 0 1.5rem 0;
                    }

                    .platform-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }

                    .platform-tag {
                        background: rgba(255, 255, 255, 0.08);
                        color: #999;
                        font-size: 0.75rem;
                        font-weight: 500;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                    }

                    .platform-card-link {
                        display: block;
                        text-align: center;
                        padding: 0.8rem;
                        border: 1px solid rgba(242, 183, 5, 0.4);
                        border-radius: 12px;
                        color: #f2b705;
                        font-weight: 600;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }

                    .platform-card-link:hover {
                        background: rgba(242, 183, 5, 0.1);
                    }

                    .cta-section {
                        background: linear-gradient(160deg, #f2b705, #bf8f03);
                        padding: 5rem 1.5rem;
                    }

                    .cta-content {
                        max-width: 720px;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .cta-section h2 {
                        color: #1a1a1a;
                        font-size: clamp(1.75rem, 4vw, 2.75rem);
                        margin: 0 0 1.25rem 0;
                    }

                    .cta-section p {
                        color: rgba(26, 26, 26, 0.8);
                        font-size: 1.05rem;
                        margin: 0 0 2rem 0;
                    }
                "#}
            </style>
        </div>
    }
}
