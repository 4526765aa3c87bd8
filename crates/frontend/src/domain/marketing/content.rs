//! Copy for the landing page and the static sections.

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "zap",
        title: "Productos Eléctricos",
        description: "Suministro integral de equipos eléctricos certificados, con respaldo técnico, garantías y soporte postventa.",
    },
    Service {
        icon: "sun",
        title: "Energía Fotovoltaica",
        description: "Ingeniería, instalación y puesta en marcha de sistemas solares con dimensionamiento, monitoreo y ahorro energético.",
    },
    Service {
        icon: "layout-panel-left",
        title: "Tableros Eléctricos",
        description: "Diseño, fabricación y pruebas de tableros de potencia y control bajo normativa y especificaciones del proyecto.",
    },
    Service {
        icon: "wrench",
        title: "Mantenimiento",
        description: "Planes preventivos y correctivos para continuidad operativa, con reportes técnicos y repuestos certificados.",
    },
    Service {
        icon: "power",
        title: "Iluminación",
        description: "Diseño lumínico eficiente, retrofit LED y automatización para reducir consumo y mejorar confort visual.",
    },
    Service {
        icon: "plug-zap",
        title: "Telecomunicaciones",
        description: "Redes estructuradas, canalizaciones y sistemas de respaldo para comunicaciones críticas y seguras.",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 4] = [
    Stat { value: "300+", label: "Proyectos ejecutados" },
    Stat { value: "12+", label: "Años de experiencia" },
    Stat { value: "100+", label: "Clientes atendidos" },
    Stat { value: "100%", label: "Enfoque en calidad" },
];

pub const MISSION: &str = "Diseñamos e implementamos soluciones integrales de energía para entornos industriales, comerciales y residenciales, con foco en continuidad operativa y eficiencia. Nos especializamos en sistemas de respaldo y autonomía (plantas eléctricas, energía solar y bancos de baterías), ejecutando cada proyecto con altos estándares de ingeniería, seguridad, calidad y cumplimiento, desde el diagnóstico hasta la puesta en marcha.";

pub const VISION: &str = "Ser un referente en Colombia en soluciones de respaldo energético y proyectos de ingeniería, reconocidos por la confiabilidad de nuestras implementaciones, la excelencia en servicio y una ejecución impecable. Aspiramos a construir alianzas de largo plazo, acompañando a nuestros clientes con innovación aplicada, soporte técnico y resultados medibles que protegen su operación y su inversión.";

pub const QUALITY_POLICY: [&str; 3] = [
    "Entregar soluciones de energía orientadas a la continuidad del cliente, con asesoría experta, planificación rigurosa y comunicación transparente en cada etapa.",
    "Ejecutar proyectos y suministros con calidad, seguridad y cumplimiento, aplicando buenas prácticas de ingeniería, pruebas y verificación para garantizar desempeño y confiabilidad.",
    "Impulsar la mejora continua mediante estandarización de procesos, capacitación permanente y evaluación del desempeño, promoviendo prácticas responsables con el medio ambiente.",
];
