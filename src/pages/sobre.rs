use yew::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("50.000+", "Clientes Satisfeitos"),
    ("1M+", "Serviços Entregues"),
    ("99.9%", "Taxa de Satisfação"),
    ("24/7", "Suporte Disponível"),
];

const VALUES: &[(&str, &str, &str)] = &[
    (
        "🎯",
        "Missão",
        "Democratizar o crescimento nas redes sociais, oferecendo serviços acessíveis \
         e de qualidade para criadores de conteúdo e empresas.",
    ),
    (
        "👥",
        "Foco no Cliente",
        "Cada cliente é único. Nos dedicamos a entender suas necessidades e entregar \
         resultados que superem expectativas.",
    ),
    (
        "⚡",
        "Inovação",
        "Utilizamos tecnologia de ponta para garantir entregas rápidas, seguras e \
         eficientes em todas as plataformas.",
    ),
    (
        "🛡️",
        "Segurança",
        "A segurança do seu perfil é nossa prioridade. Utilizamos métodos seguros e \
         discretos em todos os serviços.",
    ),
];

#[function_component(Sobre)]
pub fn sobre() -> Html {
    html! {
        <div class="sobre-page">
            <section class="sobre-hero">
                <span class="eyebrow">{"Sobre Nós"}</span>
                <h1>
                    {"Impulsionando o Sucesso nas "}
                    <span class="accent">{"Redes Sociais"}</span>
                </h1>
                <p>
                    {"Desde 2020, a Adquira Seguidor ajuda criadores de conteúdo, influenciadores \
                      e empresas a alcançarem seus objetivos nas redes sociais. Com mais de 50.000 \
                      clientes satisfeitos, somos referência em qualidade e confiança."}
                </p>
            </section>

            <section class="sobre-stats">
                { STATS.iter().map(|&(value, label)| html! {
                    <div class="stat-block">
                        <p class="stat-value">{value}</p>
                        <p class="stat-label">{label}</p>
                    </div>
                }).collect::<Html>() }
            </section>

            <section class="sobre-values">
                <div class="section-header">
                    <span class="eyebrow">{"Nossos Valores"}</span>
                    <h2>{"O Que Nos Define"}</h2>
                </div>
                <div class="values-grid">
                    { VALUES.iter().map(|&(icon, title, description)| html! {
                        <div class="value-card">
                            <div class="value-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{description}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </section>

            <style>
                {r#"
                    .sobre-page {
                        min-height: 100vh;
                        background: #0f0f0f;
                        padding: 7rem 1.5rem 4rem;
                    }

                    .sobre-hero {
                        max-width: 760px;
                        margin: 0 auto 4rem;
                        text-align: center;
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

                    .sobre-hero h1 {
                        color: #fff;
                        font-size: clamp(2rem, 4.5vw, 3rem);
                        margin: 0 0 1.5rem 0;
                    }

                    .accent {
                        color: #f2b705;
                    }

                    .sobre-hero p {
                        color: #999;
                        font-size: 1.05rem;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .sobre-stats {
                        max-width: 1100px;
                        margin: 0 auto 4rem;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        background: #161616;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 20px;
                        padding: 2.5rem;
                    }

                    @media (min-width: 768px) {
                        .sobre-stats {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }

                    .stat-block {
                        text-align: center;
                    }

                    .stat-value {
                        color: #f2b705;
                        font-size: 2rem;
                        font-weight: 800;
                        margin: 0 0 0.25rem 0;
                    }

                    .stat-label {
                        color: #999;
                        font-size: 0.85rem;
                        margin: 0;
                    }

                    .sobre-values {
                        max-width: 900px;
                        margin: 0 auto;
                    }

                    .section-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .section-header h2 {
                        color: #fff;
                        font-size: 2.25rem;
                        margin: 0;
                    }

                    .values-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .values-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    .value-card {
                        background: #161616;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.5rem;
                        transition: all 0.3s ease;
                    }

                    .value-card:hover {
                        border-color: rgba(242, 183, 5, 0.5);
                        box-shadow: 0 0 30px rgba(242, 183, 5, 0.1);
                    }

                    .value-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        border-radius: 12px;
                        background: rgba(242, 183, 5, 0.1);
                        margin-bottom: 1rem;
                    }

                    .value-card h3 {
                        color: #fff;
                        font-size: 1.25rem;
                        margin: 0 0 0.5rem 0;
                    }

                    .value-card p {
                        color: #999;
                        line-height: 1.6;
                        margin: 0;
                    }
                "#}
            </style>
        </div>
    }
}
