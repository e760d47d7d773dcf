//! Service catalog offered on the first step.

mod search;

pub use search::*;

use crate::models::Service;

/// Ordered, read-only list of bookable services.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new(default_services())
    }
}

impl ServiceCatalog {
    /// Build a catalog. Later duplicates of an id are dropped.
    pub fn new(services: Vec<Service>) -> Self {
        let mut unique: Vec<Service> = Vec::with_capacity(services.len());
        for service in services {
            if unique.iter().any(|s| s.id == service.id) {
                tracing::warn!("Duplicate service id {:?} ignored", service.id);
                continue;
            }
            unique.push(service);
        }
        Self { services: unique }
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Services ranked by how well their name or description matches `query`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<ServiceMatch> {
        rank_services(&self.services, query, limit)
    }
}

/// The practice's services, in display order.
fn default_services() -> Vec<Service> {
    vec![
        Service::new("consultation", "Consultation", 15)
            .with_description("Adulte(s) connu(s)")
            .with_image("/images/consultation.jpg"),
        Service::new("nouveau-patient", "Nouveau patient", 30)
            .with_image("/images/nouveau-patient.jpg"),
        Service::new("echographie", "Échographie", 30)
            .with_description("Rein - Vésicule - Grossesse - Musculo-squelettique - Endocavitaire -")
            .with_image("/images/echographie.jpg"),
        Service::new("depistage-covid", "Dépistage Covid Antigénique PCR", 15)
            .with_description("A PCR, Sein, RDV, Antique, Prélèvement Déplacements Résultat utérus médical")
            .with_image("/images/depistage.jpg"),
        Service::new("grossesse", "Grossesse", 30)
            .with_description("Suivi obstétrical et échographie")
            .with_image("/images/grossesse.jpg"),
        Service::new("gynecologie", "Gynécologie médicale", 30)
            .with_description("Troubles du VPC, Contraception, Spire de S.I.U. Ménopause")
            .with_image("/images/gynecologie.jpg"),
        Service::new("telemedecine", "Télémédecine dont COVID-19", 15)
            .with_description("Permet vos RDV dans le cabinet téléconseol")
            .with_image("/images/telemedecine.jpg"),
        Service::new("aptitude-sportive", "Aptitude sportive", 20)
            .with_description("Viocellini - Certificat médicopportment -")
            .with_image("/images/aptitude.jpg"),
        Service::new("suture", "Suture", 30)
            .with_description("ClosedSolution")
            .with_image("/images/suture.jpg"),
        Service::new("allaitement-pediatrie", "allaitement/pédiatrie", 30)
            .with_image("/images/pediatrie.jpg"),
        Service::new("conseils-voyageurs", "Conseils aux voyageurs / Travel advice", 20)
            .with_description("Colonial époque - Prévention - Certifie ride assessment")
            .with_image("/images/voyageurs.jpg"),
        Service::new("pressotherapie", "PRESSOTHERAPIE", 45)
            .with_image("/images/pressotherapie.jpg"),
        Service::new("rdv-professionnel", "RENDEZ-VOUS PROFESSIONNEL", 30)
            .with_image("/images/professionnel.jpg"),
    ]
}
