//! Seed dataset for the in-memory data source.
//!
//! Hand-curated sample of SEACE-style tenders, supplier profiles and saved
//! alerts. Real data ingestion from government sources is a future extension;
//! every query the service answers today is served from these records.

use crate::models::{
    Alert, AlertCriteria, AlertFrequency, Company, ContractSummary, Participant,
    PerformanceEntry, Region, Sector, Tender, TenderStatus, TimelineEntry,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

fn timeline(entries: &[(i32, u32, u32, &str)]) -> Vec<TimelineEntry> {
    entries
        .iter()
        .map(|&(y, m, d, event)| TimelineEntry {
            date: date(y, m, d),
            event: event.to_string(),
        })
        .collect()
}

fn participants(entries: &[(&str, &str)]) -> Vec<Participant> {
    entries
        .iter()
        .map(|&(name, status)| Participant {
            name: name.to_string(),
            status: status.to_string(),
        })
        .collect()
}

fn strings(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// Returns the seeded tender dataset.
pub fn seed_tenders() -> Vec<Tender> {
    vec![
        Tender {
            id: 1,
            title: "Construcción de Hospital Regional en Arequipa".to_string(),
            institution: "Gobierno Regional de Arequipa".to_string(),
            amount: 25_000_000.0,
            deadline: date(2024, 2, 15),
            status: TenderStatus::Abierto,
            sector: Sector::Construccion,
            region: Region::Arequipa,
            description: "Proyecto de construcción de hospital regional con capacidad para \
                          200 camas, incluyendo áreas de emergencia, consultorios \
                          especializados, laboratorio, farmacia y servicios administrativos."
                .to_string(),
            requirements: strings(&[
                "Experiencia mínima de 5 años en construcción de hospitales",
                "Certificación ISO 9001 vigente",
                "Capacidad financiera demostrable",
                "Personal técnico calificado",
            ]),
            documents: strings(&[
                "Bases de la licitación",
                "Plano de ubicación",
                "Especificaciones técnicas",
                "Cronograma de ejecución",
            ]),
            timeline: timeline(&[
                (2024, 1, 15, "Publicación de bases"),
                (2024, 1, 30, "Visita técnica"),
                (2024, 2, 10, "Consulta de bases"),
                (2024, 2, 15, "Presentación de propuestas"),
            ]),
            participants: participants(&[
                ("Constructora ABC S.A.", "Inscrito"),
                ("Ingenieros Unidos SAC", "Inscrito"),
                ("Proyectos Integrales EIRL", "Pendiente"),
            ]),
        },
        Tender {
            id: 2,
            title: "Sistema de Gestión Hospitalaria Integral".to_string(),
            institution: "MINSA".to_string(),
            amount: 8_500_000.0,
            deadline: date(2024, 2, 20),
            status: TenderStatus::Abierto,
            sector: Sector::Tecnologia,
            region: Region::Lima,
            description: "Desarrollo e implementación de sistema de gestión hospitalaria \
                          integral que incluya módulos de pacientes, farmacia, laboratorio \
                          y administración."
                .to_string(),
            requirements: strings(&[
                "Experiencia en desarrollo de software hospitalario",
                "Certificación CMMI nivel 3 o superior",
                "Equipo de desarrollo mínimo 10 personas",
                "Soporte técnico 24/7",
            ]),
            documents: strings(&[
                "Especificaciones técnicas",
                "Manual de usuario",
                "Documentación de API",
                "Plan de implementación",
            ]),
            timeline: timeline(&[
                (2024, 1, 20, "Publicación de bases"),
                (2024, 2, 5, "Presentación técnica"),
                (2024, 2, 15, "Consulta de bases"),
                (2024, 2, 20, "Presentación de propuestas"),
            ]),
            participants: participants(&[
                ("TechSolutions SAC", "Inscrito"),
                ("Sistemas Avanzados EIRL", "Inscrito"),
            ]),
        },
        Tender {
            id: 3,
            title: "Mantenimiento de Infraestructura Educativa".to_string(),
            institution: "MINEDU".to_string(),
            amount: 3_200_000.0,
            deadline: date(2024, 2, 25),
            status: TenderStatus::Proximo,
            sector: Sector::Educacion,
            region: Region::Cusco,
            description: "Servicios de mantenimiento preventivo y correctivo de \
                          infraestructura educativa en la región de Cusco."
                .to_string(),
            requirements: strings(&[
                "Experiencia en mantenimiento de infraestructura",
                "Personal técnico certificado",
                "Vehículos y equipos propios",
                "Cobertura en toda la región",
            ]),
            documents: strings(&[
                "Plan de mantenimiento",
                "Cronograma de actividades",
                "Especificaciones técnicas",
                "Certificaciones del personal",
            ]),
            timeline: timeline(&[
                (2024, 2, 1, "Publicación de bases"),
                (2024, 2, 15, "Visita técnica"),
                (2024, 2, 20, "Consulta de bases"),
                (2024, 2, 25, "Presentación de propuestas"),
            ]),
            participants: vec![],
        },
        Tender {
            id: 4,
            title: "Suministro de Equipos Médicos".to_string(),
            institution: "EsSalud".to_string(),
            amount: 15_000_000.0,
            deadline: date(2024, 3, 1),
            status: TenderStatus::Abierto,
            sector: Sector::Salud,
            region: Region::Piura,
            description: "Adquisición de equipos médicos especializados para hospitales \
                          de EsSalud en la región Piura."
                .to_string(),
            requirements: strings(&[
                "Autorización sanitaria vigente",
                "Certificación de calidad ISO 13485",
                "Garantía mínima de 2 años",
                "Servicio técnico autorizado",
            ]),
            documents: strings(&[
                "Catálogo de productos",
                "Certificaciones sanitarias",
                "Especificaciones técnicas",
                "Garantías y servicios",
            ]),
            timeline: timeline(&[
                (2024, 1, 25, "Publicación de bases"),
                (2024, 2, 10, "Exposición de productos"),
                (2024, 2, 20, "Consulta de bases"),
                (2024, 3, 1, "Presentación de propuestas"),
            ]),
            participants: participants(&[
                ("MedEquip SAC", "Inscrito"),
                ("Equipos Médicos del Norte", "Pendiente"),
            ]),
        },
    ]
}

/// Returns the seeded company dataset.
pub fn seed_companies() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            name: "Constructora ABC S.A.".to_string(),
            ruc: "20123456789".to_string(),
            sector: Sector::Construccion,
            region: Region::Lima,
            address: "Av. Javier Prado 1234, San Isidro, Lima".to_string(),
            phone: "+51 1 234-5678".to_string(),
            email: "contacto@constructoraabc.com".to_string(),
            website: "www.constructoraabc.com".to_string(),
            description: "Empresa líder en construcción con más de 15 años de experiencia \
                          en proyectos públicos y privados. Especializada en \
                          infraestructura hospitalaria y educativa."
                .to_string(),
            rating: 4.5,
            total_contracts: 45,
            total_amount: 125_000_000.0,
            founded_year: 2008,
            employees: 150,
            certifications: strings(&["ISO 9001", "ISO 14001", "OHSAS 18001"]),
            contracts: vec![
                ContractSummary {
                    id: 1,
                    title: "Construcción de Hospital Regional en Arequipa".to_string(),
                    institution: "Gobierno Regional de Arequipa".to_string(),
                    amount: 25_000_000.0,
                    start_date: date(2023, 3, 1),
                    end_date: date(2024, 12, 31),
                    status: "En Ejecución".to_string(),
                    sector: Sector::Construccion,
                },
                ContractSummary {
                    id: 2,
                    title: "Mantenimiento de Infraestructura Educativa".to_string(),
                    institution: "MINEDU".to_string(),
                    amount: 8_500_000.0,
                    start_date: date(2022, 8, 15),
                    end_date: date(2023, 8, 14),
                    status: "Completado".to_string(),
                    sector: Sector::Construccion,
                },
                ContractSummary {
                    id: 3,
                    title: "Construcción de Centro de Salud".to_string(),
                    institution: "MINSA".to_string(),
                    amount: 12_000_000.0,
                    start_date: date(2021, 6, 1),
                    end_date: date(2022, 11, 30),
                    status: "Completado".to_string(),
                    sector: Sector::Construccion,
                },
            ],
            performance_data: vec![
                PerformanceEntry {
                    year: "2020".to_string(),
                    contracts: 8,
                    amount: 15.2,
                },
                PerformanceEntry {
                    year: "2021".to_string(),
                    contracts: 12,
                    amount: 22.8,
                },
                PerformanceEntry {
                    year: "2022".to_string(),
                    contracts: 15,
                    amount: 28.5,
                },
                PerformanceEntry {
                    year: "2023".to_string(),
                    contracts: 10,
                    amount: 58.5,
                },
            ],
        },
        Company {
            id: 2,
            name: "TechSolutions SAC".to_string(),
            ruc: "20187654321".to_string(),
            sector: Sector::Tecnologia,
            region: Region::Lima,
            address: "Av. Arequipa 456, Lima".to_string(),
            phone: "+51 1 987-6543".to_string(),
            email: "info@techsolutions.com".to_string(),
            website: "www.techsolutions.com".to_string(),
            description: "Empresa especializada en desarrollo de software empresarial y \
                          soluciones tecnológicas para el sector público."
                .to_string(),
            rating: 4.2,
            total_contracts: 28,
            total_amount: 45_000_000.0,
            founded_year: 2015,
            employees: 85,
            certifications: strings(&["ISO 9001", "CMMI Level 3"]),
            contracts: vec![ContractSummary {
                id: 4,
                title: "Sistema de Gestión Hospitalaria".to_string(),
                institution: "MINSA".to_string(),
                amount: 8_500_000.0,
                start_date: date(2023, 1, 15),
                end_date: date(2024, 6, 30),
                status: "En Ejecución".to_string(),
                sector: Sector::Tecnologia,
            }],
            performance_data: vec![
                PerformanceEntry {
                    year: "2020".to_string(),
                    contracts: 5,
                    amount: 8.5,
                },
                PerformanceEntry {
                    year: "2021".to_string(),
                    contracts: 12,
                    amount: 12.3,
                },
                PerformanceEntry {
                    year: "2022".to_string(),
                    contracts: 10,
                    amount: 18.7,
                },
                PerformanceEntry {
                    year: "2023".to_string(),
                    contracts: 5,
                    amount: 10.5,
                },
            ],
        },
    ]
}

/// Returns the seeded alerts a session starts with.
pub fn seed_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            name: "Licitaciones de Construcción en Lima".to_string(),
            criteria: AlertCriteria {
                sector: Some(Sector::Construccion),
                region: Some(Region::Lima),
                min_amount: Some(1_000_000.0),
                max_amount: Some(50_000_000.0),
            },
            email: true,
            push: true,
            frequency: AlertFrequency::Daily,
            active: true,
            last_match: Some(date(2024, 1, 15)),
            matches: 12,
        },
        Alert {
            id: 2,
            name: "Proyectos de Tecnología".to_string(),
            criteria: AlertCriteria {
                sector: Some(Sector::Tecnologia),
                region: None,
                min_amount: Some(500_000.0),
                max_amount: Some(20_000_000.0),
            },
            email: true,
            push: false,
            frequency: AlertFrequency::Weekly,
            active: true,
            last_match: Some(date(2024, 1, 10)),
            matches: 8,
        },
        Alert {
            id: 3,
            name: "Contratos de Salud en Arequipa".to_string(),
            criteria: AlertCriteria {
                sector: Some(Sector::Salud),
                region: Some(Region::Arequipa),
                min_amount: Some(2_000_000.0),
                max_amount: Some(30_000_000.0),
            },
            email: false,
            push: true,
            frequency: AlertFrequency::Daily,
            active: false,
            last_match: Some(date(2024, 1, 8)),
            matches: 5,
        },
    ]
}
