use leptos::prelude::*;

struct SkillGroup {
    category: &'static str,
    items: &'static [&'static str],
}

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        items: &["React Native", "React.js", "Vue.js", "Redux/Vuex"],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Python", "Express", "Django", "RabbitMQ", "Kafka"],
    },
    SkillGroup {
        category: "Database",
        items: &["MongoDB", "PostgreSQL", "MySQL", "Redis"],
    },
    SkillGroup {
        category: "DevOps",
        items: &["AWS (EC2, RDS, S3)", "Docker", "Nginx", "CI/CD"],
    },
    SkillGroup {
        category: "Networking",
        items: &["Version control (Git)", "HTTP/HTTPS", "WebSockets", "SSL/TLS"],
    },
];

#[component]
pub fn About() -> impl IntoView {
    let skills = SKILL_GROUPS
        .iter()
        .map(|group| {
            let items = group
                .items
                .iter()
                .map(|skill| {
                    view! {
                        <li class="text-gray-600 dark:text-gray-300 flex items-center">
                            <span class="w-2 h-2 bg-blue-600 dark:bg-blue-400 rounded-full mr-2"></span>
                            {*skill}
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="bg-gray-50 dark:bg-gray-700 p-6 rounded-lg">
                    <h4 class="text-lg font-semibold text-blue-600 dark:text-blue-400 mb-4">
                        {group.category}
                    </h4>
                    <ul class="space-y-2">{items}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="py-20 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-6">
                <div class="mb-16 text-center section-content">
                    <h2 class="text-3xl font-bold text-gray-800 dark:text-white mb-2">
                        "About Me"
                    </h2>
                    <div class="w-20 h-1 bg-blue-600 dark:bg-blue-400 mx-auto"></div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                    <div class="section-content">
                        <h3 class="text-2xl font-bold text-gray-800 dark:text-white mb-4">
                            "Who I Am"
                        </h3>
                        <p class="text-gray-600 dark:text-gray-300 mb-4">
                            "I'm a passionate Full-Stack Developer with expertise in building mobile and web applications. My journey in the tech industry began with a strong foundation in Information Systems and has evolved through practical experience at companies like Ideo Digital and IDI Venture LTD."
                        </p>
                        <p class="text-gray-600 dark:text-gray-300 mb-4">
                            "I specialize in cross-platform mobile application development with React Native and creating seamless web experiences using modern JavaScript frameworks like React.js and Vue.js. On the backend, I'm proficient with Node.js and Python Django, with experience in both monolithic and microservices architectures."
                        </p>
                        <p class="text-gray-600 dark:text-gray-300">
                            "My approach combines technical expertise with a focus on user experience and performance optimization. I'm constantly exploring new technologies and best practices to deliver high-quality solutions."
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 section-content">{skills}</div>
                </div>
            </div>
        </section>
    }
}
